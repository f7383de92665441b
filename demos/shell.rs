use std::io::{self, BufRead, Write};

use anyhow::Result;

use memshell::{Outcome, Session, eval_line};

fn main() -> Result<()> {
    env_logger::init();

    let mut session = Session::new()?;
    let stdin = io::stdin();

    loop {
        print!("memshell:{}> ", session.pwd()?);
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match eval_line(&mut session, &line) {
            Outcome::Exit => break,
            Outcome::Output(text) if text.is_empty() => {}
            Outcome::Output(text) => println!("{text}"),
        }
    }

    let released = session.destroy();
    log::debug!("released {} directories on exit", released.len());
    Ok(())
}
