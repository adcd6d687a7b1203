//! Application shell: a small command-line front end over the engine.
//!
//! The shell only parses arguments, opens a session against the JSON file
//! store and the system clock, and prints what the engine reports. All
//! stamina rules live in the library.

use stamina_engine::{
    band, JsonFileStore, Session, SkillKind, StaminaBand, SystemClock,
};

const DEFAULT_STORE_PATH: &str = "stamina_save.json";

const USAGE: &str = "\
Usage: stamina-engine [STORE_PATH] [COMMAND]

Commands:
  status            Show stamina and the regen countdown (default)
  consume <AMOUNT>  Spend stamina on an action
  upgrade <AMOUNT>  Raise the stamina ceiling
  skill <NAME>      Use a battle skill (slash, power-slash, critical-strike,
                    devastating-blow)
  skills            List skills and their stamina costs
  reset             End the session and clear saved state";

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    // A first argument that isn't a known command is the store path.
    let commands = ["status", "consume", "upgrade", "skill", "skills", "reset"];
    let (path, rest) = match args.first() {
        Some(first) if !commands.contains(&first.as_str()) => (first.clone(), &args[1..]),
        _ => (DEFAULT_STORE_PATH.to_string(), &args[..]),
    };

    let mut session = Session::begin(SystemClock, JsonFileStore::open(&path));

    match rest {
        [] => print_status(&session),
        [cmd] if cmd.as_str() == "status" => print_status(&session),
        [cmd] if cmd.as_str() == "skills" => {
            for skill in SkillKind::ALL {
                println!("{:18} {:>3} stamina", skill.name(), skill.stamina_cost());
            }
        }
        [cmd] if cmd.as_str() == "reset" => {
            session.end();
            println!("Saved state cleared.");
        }
        [cmd, amount] if cmd.as_str() == "consume" => match amount.parse::<u32>() {
            Ok(amount) => {
                if session.consume(amount) {
                    println!("Spent {} stamina.", amount);
                } else {
                    println!("Not enough stamina!");
                }
                print_status(&session);
            }
            Err(_) => exit_with_usage(),
        },
        [cmd, amount] if cmd.as_str() == "upgrade" => match amount.parse::<u32>() {
            Ok(amount) => {
                session.increase_max(amount);
                println!("Max stamina raised to {}.", session.max_stamina());
                print_status(&session);
            }
            Err(_) => exit_with_usage(),
        },
        [cmd, name] if cmd.as_str() == "skill" => match parse_skill(name) {
            Some(skill) => {
                if session.use_skill(skill) {
                    println!("{} used ({} stamina).", skill.name(), skill.stamina_cost());
                } else {
                    println!("Not enough stamina for {}!", skill.name());
                }
                print_status(&session);
            }
            None => exit_with_usage(),
        },
        _ => exit_with_usage(),
    }
}

fn parse_skill(name: &str) -> Option<SkillKind> {
    match name {
        "slash" => Some(SkillKind::Slash),
        "power-slash" => Some(SkillKind::PowerSlash),
        "critical-strike" => Some(SkillKind::CriticalStrike),
        "devastating-blow" => Some(SkillKind::DevastatingBlow),
        _ => None,
    }
}

fn print_status<C, S>(session: &Session<C, S>)
where
    C: stamina_engine::Clock,
    S: stamina_engine::KvStore,
{
    let snapshot = session.snapshot();
    let band_label = match band(snapshot.current, snapshot.max) {
        StaminaBand::Low => "low",
        StaminaBand::Medium => "medium",
        StaminaBand::High => "high",
    };
    if snapshot.current < snapshot.max {
        println!(
            "Stamina: {}/{} ({}) - next regen in {}",
            snapshot.current,
            snapshot.max,
            band_label,
            session.formatted_time_until_next_regen()
        );
    } else {
        println!("Stamina: {}/{} (full)", snapshot.current, snapshot.max);
    }
}

fn exit_with_usage() -> ! {
    eprintln!("{}", USAGE);
    std::process::exit(2)
}
