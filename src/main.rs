// TD3 MRZ validation from the command line

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use mrzkit::models::ValidationIssueType;
use mrzkit::MrzInfo;

#[derive(Parser)]
#[command(name = "mrzkit", about = "Parse and validate the MRZ of a TD3 passport")]
struct Args {
    /// MRZ text, two lines separated by a literal \n
    mrz: Option<String>,

    /// Read the MRZ text from a file instead
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Print the full parse report as JSON
    #[arg(long)]
    json: bool,
}

// Function to print a detailed validation report
fn print_detailed_report(info: &MrzInfo) {
    println!("\n===============================================");
    println!("           MRZ VALIDATION REPORT");
    println!("===============================================\n");

    println!("DOCUMENT INFORMATION:");
    println!("  Document Number: {}", info.document_number);
    println!("  Last Name: {}", info.last_name());
    println!("  First Name: {}", info.first_name());
    println!("  Nationality: {}", info.nationality);
    println!("  Date of Birth: {}", info.date_of_birth);
    println!("  Sex: {}", info.sex);
    println!("  Date of Expiry: {}", info.expiration_date);
    println!("  Personal Number: {}", info.personal_number);

    println!("\nVALIDATION STEPS:");
    let checks = [
        ("Document Number Check Digit", info.validation.document_number_check_valid),
        ("Date of Birth Check Digit", info.validation.date_of_birth_check_valid),
        ("Date of Expiry Check Digit", info.validation.date_of_expiry_check_valid),
        ("Personal Number Check Digit", info.validation.personal_number_check_valid),
        ("Composite Check Digit", info.validation.composite_check_valid),
        ("Names Content Check", info.validation.names_check_valid),
    ];
    for (step, (name, passed)) in checks.iter().enumerate() {
        println!(
            "  {}. {}: {}",
            step + 1,
            name,
            if *passed { "PASSED" } else { "FAILED" }
        );
    }

    if !info.validation.issues.is_empty() {
        println!("\nISSUES FOUND:");
        for issue in &info.validation.issues {
            println!(
                "  - [{}] {}",
                match issue.issue_type {
                    ValidationIssueType::Structure => "STRUCTURE",
                    ValidationIssueType::Checksum => "CHECKSUM",
                    ValidationIssueType::Content => "CONTENT",
                },
                issue.message
            );
        }
    }

    println!(
        "\nMRZ validation result: {}",
        if info.acceptable { "ACCEPTABLE" } else { "NOT ACCEPTABLE" }
    );
}

fn read_input(args: &Args) -> String {
    if let Some(path) = &args.file {
        match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("Error reading {}: {}", path.display(), err);
                process::exit(1);
            }
        }
    } else if let Some(mrz) = &args.mrz {
        // Shells pass \n through as two characters; turn it back into
        // a line break.
        mrz.replace("\\n", "\n")
    } else {
        let mut buffer = String::new();
        if let Err(err) = std::io::stdin().read_to_string(&mut buffer) {
            eprintln!("Error reading stdin: {}", err);
            process::exit(1);
        }
        buffer
    }
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let input = read_input(&args);
    // Trailing newline from files and heredocs is not part of the MRZ.
    let info = MrzInfo::new(input.trim_end_matches(['\r', '\n']));

    if args.json {
        match serde_json::to_string_pretty(&info) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("Error serializing report: {}", err);
                process::exit(1);
            }
        }
    } else {
        print_detailed_report(&info);
    }

    if !info.acceptable {
        process::exit(1);
    }
}
