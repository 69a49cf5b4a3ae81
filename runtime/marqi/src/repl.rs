// Interactive read-eval-print loop over one persistent session.

use std::io::{self, Write};

use marq_eval::Runtime;

/// Start the REPL.
pub fn start() {
    let mut runtime = Runtime::new();

    println!("Marq runtime {}", env!("CARGO_PKG_VERSION"));

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            // EOF or a broken stdin ends the session
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let input = input.trim();

        match input {
            ":quit" | ":q" => break,
            ":help" | ":h" => {
                println!("Commands:");
                println!("  :quit, :q   Exit the session");
                println!("  :help, :h   Show this help");
            }
            _ if input.is_empty() => continue,
            _ => {
                if let Err(e) = runtime.eval(input) {
                    eprintln!("Error: {e}");
                }
            }
        }
    }
}
