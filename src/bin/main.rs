use crossterm::style::Stylize;
use passphrase_core::{GenerationConfig, PassphraseEngine, TransformationKind, WordBank};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{stdin, stdout, Write};
use std::path::{Path, PathBuf};

fn wordlist_dir() -> PathBuf {
    // Word lists live beside the binary's manifest; an override is
    // handy when running from an installed location.
    std::env::var_os("PASSW0RDS_WORDLISTS")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("wordlists"))
}

fn main() {
    let mut config = GenerationConfig::default();
    let mut rng = StdRng::from_entropy();
    let dir = wordlist_dir();

    loop {
        println!("\n{}", "--- Passw0rds by soodoh ---".magenta().bold());
        println!("1. Generate Passphrases");
        println!("2. Randomize Configuration");
        println!("3. Reset Configuration");
        println!("4. Modify Configuration");
        println!("5. Display Current Configuration");
        println!("{}", "6. Exit".red());

        match prompt("Choose an option: ").as_str() {
            "1" => generate(&config, &dir, &mut rng),
            "2" => {
                config = GenerationConfig::randomized(&mut rng);
                println!("{}", "Configuration randomized.".green());
            }
            "3" => {
                config = GenerationConfig::default();
                println!("{}", "Configuration reset to defaults.".green());
            }
            "4" => modify(&mut config),
            "5" => display(&config),
            "6" => {
                println!("{}", "Goodbye!".cyan());
                break;
            }
            _ => println!("{}", "Invalid option. Please choose again.".yellow()),
        }
    }
}

fn generate(config: &GenerationConfig, dir: &Path, rng: &mut StdRng) {
    let bank = match WordBank::load_from_dir(dir, config.min_length, config.max_length) {
        Ok(bank) => bank,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            return;
        }
    };
    if bank.is_empty() {
        println!(
            "{}",
            "No words matched the current length bounds; pattern symbols will render literally."
                .yellow()
        );
    }

    let engine = PassphraseEngine::new(bank);
    match engine.generate_many(config, rng) {
        Ok(passphrases) => {
            println!("\n{}", "Generated Passphrases:".green());
            for (i, phrase) in passphrases.iter().enumerate() {
                println!("{} {}", format!("{}:", i + 1).blue(), phrase);
            }
        }
        Err(e) => eprintln!("{} {}", "Error:".red(), e),
    }
}

fn display(config: &GenerationConfig) {
    println!("\n{}", "Current Configuration:".cyan());
    println!("{} {}", "count:".bold(), config.count);
    println!("{} {}", "min_length:".bold(), config.min_length);
    println!("{} {}", "max_length:".bold(), config.max_length);
    println!("{} {}", "min_leet_chars:".bold(), config.min_leet_chars);
    println!("{} {}", "max_leet_chars:".bold(), config.max_leet_chars);
    println!("{} {}", "pattern:".bold(), config.pattern);
    println!("{} {}", "transformation:".bold(), config.transformation.name());
}

/// Prompts for every field; an empty answer keeps the current value.
/// The edited config only replaces the live one if it validates.
fn modify(config: &mut GenerationConfig) {
    println!("\n{}", "Modify Configuration".blue());
    let mut edited = config.clone();

    prompt_number("count", &mut edited.count);
    prompt_number("min_length", &mut edited.min_length);
    prompt_number("max_length", &mut edited.max_length);
    prompt_number("min_leet_chars", &mut edited.min_leet_chars);
    prompt_number("max_leet_chars", &mut edited.max_leet_chars);

    let pattern = prompt(&format!(
        "Enter value for pattern (current: {}): ",
        edited.pattern
    ));
    if !pattern.is_empty() {
        edited.pattern = pattern;
    }

    let transformation = prompt(&format!(
        "Enter value for transformation [plain/miniLeet/leet] (current: {}): ",
        edited.transformation.name()
    ));
    if !transformation.is_empty() {
        match TransformationKind::from_name(&transformation) {
            Some(kind) => edited.transformation = kind,
            None => {
                println!(
                    "{}",
                    format!("Unknown transformation '{transformation}', keeping current.").yellow()
                );
            }
        }
    }

    match edited.validate() {
        Ok(()) => {
            *config = edited;
            println!("{}", "Configuration updated successfully!".green());
        }
        Err(e) => println!("{} {}", "Invalid configuration:".red(), e),
    }
}

fn prompt_number(name: &str, value: &mut usize) {
    let answer = prompt(&format!("Enter value for {name} (current: {value}): "));
    if answer.is_empty() {
        return;
    }
    match answer.parse() {
        Ok(parsed) => *value = parsed,
        Err(_) => println!(
            "{}",
            format!("'{answer}' is not a number, keeping current {name}.").yellow()
        ),
    }
}

fn prompt(message: &str) -> String {
    print!("{message}");
    let _ = stdout().flush();
    let mut input = String::new();
    if stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}
