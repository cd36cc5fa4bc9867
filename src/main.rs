use expense_log::Shell;
use log::error;
use std::{io, process};

fn main() {
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock());

    if let Err(e) = shell.run() {
        error!("session aborted: {:?}", e);
        eprintln!("{}", e);
        process::exit(1);
    }
}
