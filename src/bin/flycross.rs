//! flycross CLI - Drosophila cross planner
//!
//! Commands:
//!   flycross plan     - plan crosses from a stock catalog to a target genotype
//!   flycross cross    - offspring distribution of one cross
//!   flycross gametes  - gametes of a genotype
//!   flycross check    - lethality, balancer and eligibility verdicts
//!   flycross stocks   - list/add/remove/import catalog records
//!   flycross demo     - plan over a built-in set of stocks

use flycross_core::genetics::{
    allowed_as_female_parent, cross, get_gametes, has_homozygous_balancer, is_lethal,
    validate_stock_genotype, BreedingRole, Genotype, Parent, RoleEligibility,
};
use flycross_core::planner::{
    BreedingPlan, BreedingPlanner, PlanOutcome, PlanRequest, SearchConfig, Stock,
};
use flycross_core::storage::{Sex, StockCatalog, StockRecord};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;

const DEFAULT_STOCK_FILE: &str = "flycross-stocks.json";
const DEFAULT_GENERATIONS: u32 = 3;

fn print_usage() {
    println!(
        r#"
flycross v0.1 - Drosophila cross planner (autosomes 2, 3, 4)

Usage: flycross <command> [options]

Commands:
  plan    <stocks.json> "<target>" [generations] [--json] [--quick]   Plan crosses to a target
  cross   "<female>" "<male>" [--sample N] [--seed S]               Offspring of one cross
  gametes "<genotype>"                                              Gametes with probabilities
  check   "<genotype>"                                              Validity and eligibility
  stocks  list [file]                                               List catalog records
  stocks  add <file> <name> "<genotype>" [F|M] [notes...]           Add a stock
  stocks  remove <file> <name>                                      Remove a stock
  stocks  import <file> <sheet.csv>                                 Import a CSV stock sheet
  demo                                                              Plan over built-in stocks

Genotype format: "2:CyO/+ 3:TM3/+ 4:+/+" (missing chromosomes are +/+)

Examples:
  flycross stocks add lab.json bal "2:CyO/+ 3:TM3/+" F
  flycross plan lab.json "2:a/CyO 3:+/+ 4:+/+" 3
  flycross cross "2:CyO/+" "2:a/+" --sample 200
"#
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "plan" => cmd_plan(&args[2..]),
        "cross" => cmd_cross(&args[2..]),
        "gametes" => cmd_gametes(&args[2..]),
        "check" => cmd_check(&args[2..]),
        "stocks" => cmd_stocks(&args[2..]),
        "demo" => cmd_demo(),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
        }
    }
}

fn parse_or_report(text: &str) -> Option<Genotype> {
    match text.parse::<Genotype>() {
        Ok(g) => Some(g),
        Err(e) => {
            eprintln!("  Invalid genotype '{}': {}", text, e);
            None
        }
    }
}

/// Value following `flag` in `args`
fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}

fn print_outcome(outcome: &PlanOutcome) {
    match outcome {
        PlanOutcome::Found(plan) => print_plan(plan),
        PlanOutcome::NotFound { reason } => println!("\n  No plan found: {}", reason),
        PlanOutcome::Truncated {
            generations_explored,
            crosses_evaluated,
        } => println!(
            "\n  Search truncated in generation {} after {} crosses",
            generations_explored, crosses_evaluated
        ),
    }
}

fn print_plan(plan: &BreedingPlan) {
    println!("\n  {}", plan.summary());
    println!("  {}", "-".repeat(80));
    for step in &plan.steps {
        println!("  {}", step);
    }
    println!("  Fingerprint: {}", &plan.fingerprint()[..16]);
}

fn cmd_plan(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Usage: flycross plan <stocks.json> \"<target>\" [generations] [--json] [--quick]");
        return;
    }

    let catalog = match StockCatalog::open(&args[0]) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("  Failed to open '{}': {}", args[0], e);
            return;
        }
    };
    let stocks = match catalog.to_stocks() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("  Catalog rejected: {}", e);
            return;
        }
    };
    let Some(target) = parse_or_report(&args[1]) else {
        return;
    };
    let generations: u32 = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_GENERATIONS);
    let config = if args.iter().any(|a| a == "--quick") {
        SearchConfig::quick()
    } else {
        SearchConfig::default()
    };

    let request = PlanRequest::new(stocks, target, generations);
    match BreedingPlanner::new(config).plan(&request) {
        Ok(outcome) if args.iter().any(|a| a == "--json") => match serde_json::to_string_pretty(&outcome) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("  Failed to serialize plan: {}", e),
        },
        Ok(outcome) => print_outcome(&outcome),
        Err(e) => eprintln!("  Planning failed: {}", e),
    }
}

fn cmd_cross(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Usage: flycross cross \"<female>\" \"<male>\" [--sample N] [--seed S]");
        return;
    }
    let (Some(female), Some(male)) = (parse_or_report(&args[0]), parse_or_report(&args[1])) else {
        return;
    };
    if !allowed_as_female_parent(&female) {
        eprintln!("  {} may not take the female role (unbalanced heterozygous chromosome)", female);
        return;
    }

    let dist = match cross(Parent::female(&female), Parent::male(&male)) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("  Cross failed: {}", e);
            return;
        }
    };
    println!("\n  {} (F) x {} (M)", female, male);
    if dist.is_empty() {
        println!("  Fully lethal cross: no viable offspring");
        return;
    }
    for (genotype, freq) in dist.unique_offspring() {
        println!("  {:>7.4}  {}", freq, genotype);
    }

    if let Some(n) = flag_value(args, "--sample").and_then(|s| s.parse::<usize>().ok()) {
        let seed = flag_value(args, "--seed")
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(42);
        let mut rng = StdRng::seed_from_u64(seed);
        println!("\n  Sampled vial of {} (seed {}):", n, seed);
        for (genotype, count) in dist.sample(&mut rng, n) {
            println!("  {:>7}  {}", count, genotype);
        }
    }
}

fn cmd_gametes(args: &[String]) {
    let Some(genotype) = args.first().and_then(|s| parse_or_report(s)) else {
        eprintln!("Usage: flycross gametes \"<genotype>\"");
        return;
    };
    let gametes = get_gametes(&genotype, BreedingRole::Male);
    println!("\n  Gametes of {} ({}):", genotype, gametes.len());
    for gamete in gametes {
        println!("  {}", gamete);
    }
}

fn cmd_check(args: &[String]) {
    let Some(genotype) = args.first().and_then(|s| parse_or_report(s)) else {
        eprintln!("Usage: flycross check \"<genotype>\"");
        return;
    };
    println!("\n  Genotype:            {}", genotype);
    println!("  Lethal:              {}", is_lethal(&genotype));
    println!("  Homozygous balancer: {}", has_homozygous_balancer(&genotype));
    println!("  Female-role allowed: {}", allowed_as_female_parent(&genotype));
    println!("  Breeding roles:      {}", RoleEligibility::for_genotype(&genotype).label());
    println!("  True-breeding:       {}", genotype.is_homozygous());
    match validate_stock_genotype(&genotype) {
        Ok(()) => println!("  Valid stock:         yes"),
        Err(e) => println!("  Valid stock:         no ({})", e),
    }
}

fn cmd_stocks(args: &[String]) {
    let subcmd = args.first().map(|s| s.as_str()).unwrap_or("list");

    match subcmd {
        "list" => {
            let path = args.get(1).map(|s| s.as_str()).unwrap_or(DEFAULT_STOCK_FILE);
            let catalog = match StockCatalog::open(path) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("  Failed to open '{}': {}", path, e);
                    return;
                }
            };
            if catalog.is_empty() {
                println!("\n  No stocks. Use 'flycross stocks add' to create some.");
                return;
            }
            println!("\n  {}", catalog.summary());
            println!("  {}", "-".repeat(70));
            for record in catalog.list() {
                println!(
                    "  {:<16} {:<3} {:<32} {}",
                    record.name,
                    record.sex.map(|s| s.to_string()).unwrap_or_else(|| "-".into()),
                    record.genotype,
                    record.notes.as_deref().unwrap_or("")
                );
            }
        }
        "add" => {
            if args.len() < 4 {
                eprintln!("Usage: flycross stocks add <file> <name> \"<genotype>\" [F|M] [notes...]");
                return;
            }
            let mut catalog = match StockCatalog::open(&args[1]) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("  Failed to open '{}': {}", args[1], e);
                    return;
                }
            };
            let mut record = StockRecord::new(args[2].clone(), args[3].clone());
            let mut rest = &args[4..];
            if let Some(sex) = rest.first().and_then(|s| s.parse::<Sex>().ok()) {
                record.sex = Some(sex);
                rest = &rest[1..];
            }
            if !rest.is_empty() {
                record.notes = Some(rest.join(" "));
            }
            match catalog.add(record).and_then(|_| catalog.save()) {
                Ok(()) => println!("  Added '{}' ({} stocks)", args[2], catalog.len()),
                Err(e) => eprintln!("  Failed to add stock: {}", e),
            }
        }
        "remove" => {
            if args.len() < 3 {
                eprintln!("Usage: flycross stocks remove <file> <name>");
                return;
            }
            let mut catalog = match StockCatalog::open(&args[1]) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("  Failed to open '{}': {}", args[1], e);
                    return;
                }
            };
            match catalog.remove(&args[2]).and_then(|_| catalog.save()) {
                Ok(()) => println!("  Removed '{}'", args[2]),
                Err(e) => eprintln!("  Failed to remove stock: {}", e),
            }
        }
        "import" => {
            if args.len() < 3 {
                eprintln!("Usage: flycross stocks import <file> <sheet.csv>");
                return;
            }
            let mut catalog = match StockCatalog::open(&args[1]) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("  Failed to open '{}': {}", args[1], e);
                    return;
                }
            };
            match catalog.import_sheet(&args[2]) {
                Ok(count) => match catalog.save() {
                    Ok(()) => println!("  Imported {} stocks ({} total)", count, catalog.len()),
                    Err(e) => eprintln!("  Failed to save catalog: {}", e),
                },
                Err(e) => eprintln!("  Import failed, catalog left unchanged: {}", e),
            }
        }
        other => {
            eprintln!("Unknown stocks subcommand: {}", other);
            eprintln!("Usage: flycross stocks [list|add|remove|import]");
        }
    }
}

fn cmd_demo() {
    let demo = [
        ("double-balancer", "2:CyO/+ 3:TM3/+ 4:+/+"),
        ("a-mutant", "2:a/a 3:+/+ 4:+/+"),
        ("b-mutant", "2:+/+ 3:b/b 4:+/+"),
    ];
    let mut stocks = Vec::new();
    for (name, text) in demo {
        let Some(genotype) = parse_or_report(text) else {
            return;
        };
        println!("  Stock {:<16} {}", name, genotype);
        stocks.push(Stock::new(name, genotype));
    }

    let Some(target) = parse_or_report("2:a/CyO 3:b/TM3 4:+/+") else {
        return;
    };
    println!("\n  Target: {}", target);
    let request = PlanRequest::new(stocks, target, DEFAULT_GENERATIONS);
    match BreedingPlanner::new(SearchConfig::default()).plan(&request) {
        Ok(outcome) => print_outcome(&outcome),
        Err(e) => eprintln!("  Planning failed: {}", e),
    }
}
