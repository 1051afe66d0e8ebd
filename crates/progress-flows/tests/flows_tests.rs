use chrono::Utc;
use progress_domain::{HabitabilityCase, HardshipDeclaration, LandlordDetails, LeaseType, NorentLetter, OnboardingInfo,
                      Session};
use progress_flows::{evictionfree_flow, flow_by_name, flow_names, habitability_flow, norent_flow};
use uuid::Uuid;

fn onboarded_session() -> Session {
    Session { user_id: Some(Uuid::new_v4()),
              onboarding: Some(OnboardingInfo::new("Boop",
                                                   "Jones",
                                                   "150 Court St",
                                                   Some("2"),
                                                   "11201",
                                                   "5551234567",
                                                   LeaseType::RentStabilized,
                                                   false).unwrap()),
              ..Session::default() }
}

#[test]
fn registry_exposes_every_product_flow() {
    assert_eq!(flow_names(), vec!["evictionfree", "habitability", "norent"]);
    assert!(flow_by_name("norent").is_some());
    assert!(flow_by_name("unknown-product").is_none());
}

#[test]
fn fresh_visitor_walks_every_norent_step() {
    let flow = norent_flow();
    let session = Session::empty();
    let mut path = "/norent/splash".to_string();
    let mut visited = vec![path.clone()];
    while let Some(step) = flow.best_next_step(&session, &path) {
        path = step.path.clone();
        visited.push(path.clone());
    }
    assert_eq!(visited,
               vec!["/norent/splash",
                    "/norent/name",
                    "/norent/address",
                    "/norent/contact",
                    "/norent/landlord/name",
                    "/norent/landlord/address",
                    "/norent/preview",
                    "/norent/confirmation"]);
}

#[test]
fn onboarded_user_skips_the_embedded_account_steps() {
    let flow = norent_flow();
    let session = onboarded_session();
    let next = flow.best_next_step(&session, "/norent/splash").expect("landlord name expected");
    assert_eq!(next.path, "/norent/landlord/name");
}

#[test]
fn looked_up_landlord_skips_the_manual_address_step() {
    let flow = norent_flow();
    let mut session = onboarded_session();
    session.landlord =
        Some(LandlordDetails::from_lookup("Landlordo Calrissian", "1 Cloud City Dr", "Bespin", "NY", "12345").unwrap());
    let next = flow.best_next_step(&session, "/norent/landlord/name").expect("preview expected");
    assert_eq!(next.path, "/norent/preview");
    // Y hacia atrás desde el preview tampoco debe aterrizar ahí.
    let prev = flow.best_prev_step(&session, "/norent/preview").expect("landlord name expected");
    assert_eq!(prev.path, "/norent/landlord/name");
}

#[test]
fn send_confirm_modal_locates_the_preview_step() {
    let flow = norent_flow();
    let idx = flow.locate("/norent/preview/send-confirm-modal").expect("modal should locate its parent");
    assert_eq!(flow.steps()[idx].path, "/norent/preview");
}

#[test]
fn backward_navigation_never_lands_on_confirmation() {
    // La confirmación está marcada never_go_back_to: un "atrás" hipotético
    // desde una ruta posterior no debe ofrecerla como destino.
    let flow = norent_flow();
    let session = onboarded_session();
    let located = flow.locate("/norent/confirmation").expect("confirmation exists");
    assert!(flow.steps()[located].never_go_back_to);
}

#[test]
fn norent_latest_step_tracks_session_progress() {
    let flow = norent_flow();

    assert_eq!(flow.latest_step(&Session::empty()), Some("/norent/splash"));

    let session = onboarded_session();
    assert_eq!(flow.latest_step(&session), Some("/norent/landlord/name"));

    let mut session = onboarded_session();
    session.landlord =
        Some(LandlordDetails::new("Landlordo Calrissian", "1 Cloud City Dr", "Bespin", "NY", "12345").unwrap());
    session.norent_letters.push(NorentLetter { tracking_number: "9400".to_string(),
                                               sent_at: Utc::now() });
    assert_eq!(flow.latest_step(&session), Some("/norent/confirmation"));
}

#[test]
fn evictionfree_skips_index_number_without_active_case() {
    let flow = evictionfree_flow();
    let session = onboarded_session();
    let next = flow.best_next_step(&session, "/evictionfree/contact").expect("preview expected");
    assert_eq!(next.path, "/evictionfree/preview");
}

#[test]
fn evictionfree_visits_index_number_with_active_case() {
    let flow = evictionfree_flow();
    let mut session = onboarded_session();
    session.hardship_declaration = Some(HardshipDeclaration { index_number: None,
                                                              has_current_case: true,
                                                              submitted_at: None });
    let next = flow.best_next_step(&session, "/evictionfree/contact").expect("index number expected");
    assert_eq!(next.path, "/evictionfree/declaration/index-number");
}

#[test]
fn habitability_issue_modal_locates_the_issues_step() {
    let flow = habitability_flow();
    let idx = flow.locate("/habitability/issues/mold-modal").expect("modal should locate its parent");
    assert_eq!(flow.steps()[idx].path, "/habitability/issues");
}

#[test]
fn habitability_latest_step_advances_with_the_case() {
    let flow = habitability_flow();
    let mut session = onboarded_session();
    session.habitability = Some(HabitabilityCase { issues: vec!["mold".to_string()],
                                                   ..HabitabilityCase::default() });
    assert_eq!(flow.latest_step(&session), Some("/habitability/access-dates"));
}
