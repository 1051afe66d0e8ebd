//! Demo del motor de pasos: recorre el flujo NoRent con un snapshot de
//! sesión canónico y muestra la navegación calculada.

use progress_domain::Session;
use progress_flows::norent_flow;

fn main() {
    // Snapshot como lo entregaría el backend (usuario con onboarding hecho).
    let raw = r#"{
        "user_id": "3f2f8f0a-6a51-4f2a-9d2e-0b9f5f3d7c11",
        "onboarding": {
            "first_name": "Boop",
            "last_name": "Jones",
            "street_address": "150 Court St",
            "apt_number": "2",
            "zip_code": "11201",
            "phone_number": "5551234567",
            "lease_type": "rent_stabilized",
            "receives_public_assistance": false
        }
    }"#;
    let session: Session = match serde_json::from_str(raw) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("snapshot parse error: {e}");
            std::process::exit(3);
        }
    };

    let flow = norent_flow();
    println!("flujo norent: {} pasos", flow.len());

    // Redirección de reanudación para la URL genérica del flujo.
    match flow.latest_step(&session) {
        Some(target) => println!("latest -> {target}"),
        None => println!("latest -> (flujo vacío)"),
    }

    // Cadena de "siguiente" desde el primer paso.
    let mut path = flow.steps()[0].path.clone();
    print!("forward: {path}");
    while let Some(step) = flow.best_next_step(&session, &path) {
        path = step.path.clone();
        print!(" -> {path}");
    }
    println!();

    // Un salto hacia atrás desde el preview.
    match flow.best_prev_step(&session, "/norent/preview") {
        Some(step) => println!("back from preview -> {}", step.path),
        None => println!("back from preview -> (inicio del flujo)"),
    }
}
