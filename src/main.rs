use std::io::{self, Read};
use textfit::run_scenario;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("textfit - Auto-scale element font size to rendered width");
        println!();
        println!("Usage: textfit [OPTIONS] [SCENARIO]");
        println!();
        println!("Reads a JSON scenario from argument or stdin and prints the");
        println!("font-size of each attached element after every event.");
        println!();
        println!("Options:");
        println!("  -h, --help  Show this help message");
        println!();
        println!("Scenario format:");
        println!("  {{");
        println!("    \"viewportWidth\": 1000,");
        println!("    \"elements\": [{{ \"tag\": \"h1\", \"id\": \"title\",");
        println!("                    \"text\": \"Hello world\", \"widthFraction\": 0.8 }}],");
        println!("    \"attach\": [{{ \"selector\": \"#title\",");
        println!("                  \"options\": {{ \"scale\": 0.9, \"maxFontSize\": 120 }} }}],");
        println!("    \"events\": [{{ \"type\": \"resize\", \"viewportWidth\": 500 }},");
        println!("               {{ \"type\": \"wait\", \"ms\": 150 }}]");
        println!("  }}");
        println!();
        println!("Example:");
        println!("  textfit \"$(cat scenario.json)\"");
        println!("  cat scenario.json | textfit");
        return;
    }

    // Get input from argument or stdin
    let input: String = args
        .iter()
        .skip(1)
        .find(|a| !a.starts_with('-'))
        .cloned()
        .unwrap_or_else(|| {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .expect("Failed to read from stdin");
            buf
        });

    if input.trim().is_empty() {
        eprintln!("Error: No input provided");
        std::process::exit(1);
    }

    match run_scenario(&input) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
