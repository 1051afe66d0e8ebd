use log::debug;
use progress_core::ProgressError;
use progress_domain::Session;

fn usage() {
    eprintln!("Uso: progress-cli <next|prev|latest|locate|steps> --flow <NAME> [--path <PATH>] [--session <FILE>]");
}

/// Carga el snapshot de sesión desde un archivo JSON; sin `--session` se usa
/// la sesión vacía (visitante anónimo).
fn load_session(file: Option<&str>) -> Result<Session, String> {
    match file {
        None => Ok(Session::empty()),
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|e| format!("session read error: {e}"))?;
            serde_json::from_str(&raw).map_err(|e| format!("session JSON parse error: {e}"))
        }
    }
}

fn main() {
    // Cargar .env si existe (p. ej. RUST_LOG para herramientas que lo lean)
    let _ = dotenvy::dotenv();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        usage();
        std::process::exit(2);
    }
    let command = args[1].as_str();
    if !matches!(command, "next" | "prev" | "latest" | "locate" | "steps") {
        usage();
        std::process::exit(2);
    }

    let mut flow_name: Option<String> = None;
    let mut path: Option<String> = None;
    let mut session_file: Option<String> = None;
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--flow" => {
                i += 1;
                if i < args.len() { flow_name = Some(args[i].clone()); }
            }
            "--path" => {
                i += 1;
                if i < args.len() { path = Some(args[i].clone()); }
            }
            "--session" => {
                i += 1;
                if i < args.len() { session_file = Some(args[i].clone()); }
            }
            _ => {}
        }
        i += 1;
    }

    let flow_name = match flow_name {
        Some(f) => f,
        None => {
            usage();
            std::process::exit(2);
        }
    };
    let flow = match progress_flows::flow_by_name(&flow_name) {
        Some(f) => f,
        None => {
            eprintln!("[progress-cli] flujo desconocido: {} (disponibles: {})",
                      flow_name,
                      progress_flows::flow_names().join(", "));
            std::process::exit(4);
        }
    };
    let session = match load_session(session_file.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("[progress-cli] {e}");
            std::process::exit(3);
        }
    };
    debug!("flow={} steps={}", flow_name, flow.len());

    match command {
        "next" | "prev" => {
            let path = match path {
                Some(p) => p,
                None => {
                    usage();
                    std::process::exit(2);
                }
            };
            let resolved = if command == "next" {
                flow.require_next_step(&session, &path)
            } else {
                flow.require_prev_step(&session, &path)
            };
            match resolved {
                Ok(step) => println!("{}", step.path),
                Err(ProgressError::EndOfFlow(_)) => println!("(end of flow)"),
                Err(ProgressError::StartOfFlow(_)) => println!("(start of flow)"),
                Err(e) => {
                    eprintln!("[progress-cli] {e}");
                    std::process::exit(4);
                }
            }
        }
        "latest" => match flow.require_latest_step(&session) {
            Ok(target) => println!("{target}"),
            Err(e) => {
                eprintln!("[progress-cli] {e}");
                std::process::exit(4);
            }
        },
        "locate" => {
            let path = match path {
                Some(p) => p,
                None => {
                    usage();
                    std::process::exit(2);
                }
            };
            match flow.locate(&path) {
                Some(idx) => println!("{} {}", idx, flow.steps()[idx].path),
                None => {
                    eprintln!("[progress-cli] ningún paso coincide con '{path}'");
                    std::process::exit(4);
                }
            }
        }
        "steps" => {
            for (idx, step) in flow.steps().iter().enumerate() {
                let mut flags = Vec::new();
                if step.exact { flags.push("exact"); }
                if step.is_complete.is_some() { flags.push("complete?"); }
                if step.should_be_skipped.is_some() { flags.push("skip?"); }
                if step.never_go_back_to { flags.push("no-back"); }
                println!("{:2}  {:<40} {}", idx, step.path, flags.join(","));
            }
        }
        _ => unreachable!("command validated above"),
    }
}
