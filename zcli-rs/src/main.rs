use zcli::cli;
use zcli::console::StdConsole;
use zcli::repl;
use zcli::script::{Interpreter, ScriptError};

fn main() {
    let args = match cli::parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("zcli: {e}");
            eprintln!("Usage: zcli [<file>.zcli]");
            std::process::exit(1);
        }
    };

    let mut interp = Interpreter::new(StdConsole);
    let code = match args.script {
        // One positional argument: run the file, then return.
        Some(path) => match interp.run_file(&path) {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("zcli: {e}");
                if matches!(e, ScriptError::FatalReplay { .. }) {
                    eprintln!("Program execution halted.");
                }
                1
            }
        },
        // No arguments: interactive loop.
        None => repl::run(&mut interp),
    };
    std::process::exit(code);
}
