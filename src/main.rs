use calculon::Session;
use clap::Parser;

/// calculon evaluates calculator expressions the way the keypad engine
/// previews them.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prints the parsed expression tree before the value.
    #[arg(short, long)]
    tree: bool,

    /// Closes any groups left open before evaluating, like the live preview.
    #[arg(short, long)]
    preview: bool,

    /// Value substituted for `ANS`.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    ans: f64,

    /// Value substituted for `MEM`.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    mem: f64,

    /// The expression, e.g. "2^3^2" or "(1–2)–3".
    #[arg(allow_hyphen_values = true)]
    expression: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let session = Session::with_variables(args.ans, args.mem);

    let mut tokens = session.tokenize(&args.expression).unwrap_or_else(|e| {
                                                            eprintln!("{e}");
                                                            std::process::exit(1);
                                                        });
    if args.preview {
        calculon::session::balance_parentheses(&mut tokens);
    }

    let tree = calculon::parse(&tokens);
    if args.tree {
        println!("{tree}");
    }
    println!("{}", tree.evaluate());
}
