use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use colored::Colorize;
use rand::Rng;

use crate::advisor::{reply_to, GREETING, QUICK_QUESTIONS};
use crate::error::Result;

fn print_reply(reply: &str) {
    println!();
    for line in reply.lines() {
        println!("  {line}");
    }
    println!();
}

/// One-shot question, no session. Used by `tcs ask` and handy in scripts.
pub fn ask(question: &str) -> Result<()> {
    print_reply(reply_to(question));
    Ok(())
}

pub fn run() -> Result<()> {
    println!("{}", GREETING.cyan());
    println!();
    for (i, q) in QUICK_QUESTIONS.iter().enumerate() {
        println!("{}", format!("  {}. {q}", i + 1).dimmed());
    }
    println!();

    let stdin = io::stdin();
    loop {
        print!("{} ", "you>".bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if matches!(input, "q" | "quit" | "exit") {
            break;
        }

        // A bare number picks the matching quick question.
        let question = input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| QUICK_QUESTIONS.get(i).copied())
            .unwrap_or(input);
        if question != input {
            println!("{}", format!("     ({question})").dimmed());
        }

        // Brief pause so replies don't land mid-keystroke.
        let pause = rand::thread_rng().gen_range(300..800);
        thread::sleep(Duration::from_millis(pause));

        print!("{}", "tcs>".cyan().bold());
        print_reply(reply_to(question));
    }

    println!("Bye!");
    Ok(())
}
