//! Shared terminal output and prompt helpers.

use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};

/// Print a section header.
pub fn header(title: &str) {
    println!();
    println!("{}", title.bright_white().bold());
    println!("{}", "-".repeat(title.len()).dimmed());
}

/// Print a bulleted, wrapped list.
pub fn bullet_list(items: &[String]) {
    for item in items {
        let lines = wrap_text(item, 72);
        for (i, line) in lines.iter().enumerate() {
            if i == 0 {
                println!("  {} {}", "•".cyan(), line);
            } else {
                println!("    {}", line);
            }
        }
    }
}

/// Wrap text to given width, preserving words
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut wrapped = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if !current_line.is_empty() && current_line.len() + 1 + word.len() > width {
            wrapped.push(current_line);
            current_line = word.to_string();
        } else {
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
    }

    if !current_line.is_empty() {
        wrapped.push(current_line);
    }

    if wrapped.is_empty() {
        wrapped.push(String::new());
    }

    wrapped
}

fn read_line() -> io::Result<String> {
    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Single choice - user picks exactly one option by number.
pub fn ask_single(question: &str, options: &[&str]) -> io::Result<String> {
    println!();
    println!("   {}", question.bright_white());
    for (i, opt) in options.iter().enumerate() {
        println!("   {}  {}", format!("[{}]", i + 1).cyan(), opt);
    }

    loop {
        print!("   {}  ", "Enter number:".bright_magenta());
        io::stdout().flush()?;
        let input = read_line()?;

        if let Ok(num) = input.parse::<usize>() {
            if num >= 1 && num <= options.len() {
                return Ok(options[num - 1].to_string());
            }
        }
        println!("   {}", "Invalid choice, try again".yellow());
    }
}

/// Multi choice - comma-separated numbers, empty input selects nothing.
pub fn ask_multi(question: &str, options: &[&str]) -> io::Result<Vec<String>> {
    println!();
    println!("   {}", question.bright_white());
    for (i, opt) in options.iter().enumerate() {
        println!("   {}  {}", format!("[{}]", i + 1).cyan(), opt);
    }

    loop {
        print!("   {}  ", "Enter numbers (comma separated, empty for none):".bright_magenta());
        io::stdout().flush()?;
        let input = read_line()?;

        if input.is_empty() {
            return Ok(Vec::new());
        }

        let mut selected = Vec::new();
        let mut valid = true;
        for part in input.split(',') {
            match part.trim().parse::<usize>() {
                Ok(num) if num >= 1 && num <= options.len() => {
                    let choice = options[num - 1].to_string();
                    if !selected.contains(&choice) {
                        selected.push(choice);
                    }
                }
                _ => {
                    valid = false;
                    break;
                }
            }
        }

        if valid {
            return Ok(selected);
        }
        println!("   {}", "Invalid selection, try again".yellow());
    }
}

/// 1-10 rating scale.
pub fn ask_scale(question: &str, lo: u8, hi: u8) -> io::Result<u8> {
    println!();
    println!("   {}", question.bright_white());

    loop {
        print!("   {}  ", format!("Enter {}-{}:", lo, hi).bright_magenta());
        io::stdout().flush()?;
        let input = read_line()?;

        if let Ok(num) = input.parse::<u8>() {
            if num >= lo && num <= hi {
                return Ok(num);
            }
        }
        println!("   {}", "Invalid rating, try again".yellow());
    }
}

/// Free text prompt.
pub fn ask_text(question: &str) -> io::Result<String> {
    println!();
    println!("   {}", question.bright_white());
    print!("   {}  ", ">".bright_magenta());
    io::stdout().flush()?;
    read_line()
}
