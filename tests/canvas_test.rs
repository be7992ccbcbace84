//! Front-end view state driven by data from a live API

use tokio::net::TcpListener;

use studyforge::canvas::{
    theme::ConnectionStyle, JitterMode, NodeIcon, PointerTarget, SkillTreeCanvas, ThemeId,
};
use studyforge::client::{ApiClient, ClientConfig};
use studyforge::store::NodeStatus;
use studyforge::views::{PlannerView, Rating, ReviewFilter, ReviewMode, ReviewSession};
use studyforge::{build_router, AppState};

async fn client() -> ApiClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, build_router(AppState::seeded()))
            .await
            .unwrap();
    });
    ApiClient::new(ClientConfig {
        base_url: format!("http://{}/api", addr),
        timeout_secs: Some(5),
    })
    .unwrap()
}

async fn canvas(client: &ApiClient) -> SkillTreeCanvas {
    let available = client.fetch_available_trees().await.unwrap();
    let tree = client.fetch_skill_tree("fullstack").await.unwrap();
    SkillTreeCanvas::new(available, tree, (1000.0, 600.0)).with_jitter(JitterMode::Seeded)
}

#[tokio::test]
async fn test_switch_tree_and_unlock_node() {
    let client = client().await;
    let mut canvas = canvas(&client).await;
    assert_eq!(canvas.available_trees().len(), 3);

    let python = client.fetch_skill_tree("python-ds").await.unwrap();
    canvas.click_node("html-basics");
    canvas.load_tree("python-ds", python);
    assert_eq!(canvas.tree_id(), "python-ds");
    assert!(canvas.selected_node().is_none());

    assert!(canvas.center_on_node("numpy"));
    let detail = canvas.detail().unwrap();
    assert_eq!(detail.title, "NumPy");
    assert_eq!(detail.action_label, "ENTRAR AL DOJO");

    let updated = client
        .update_node_status("python-ds", "numpy", NodeStatus::InProgress)
        .await
        .unwrap();
    canvas.apply_node_update(&updated);

    let scene = canvas.scene();
    let numpy = scene.nodes.iter().find(|n| n.id == "numpy").unwrap();
    assert_eq!(numpy.visual.diameter, 80.0);
    assert!(!numpy.visual.dimmed);

    // The link into an in-progress node carries the flow overlay
    let link = scene.links.iter().find(|l| l.target == "numpy").unwrap();
    assert!(link.flow.is_some());
}

#[tokio::test]
async fn test_seeded_scene_is_stable() {
    let client = client().await;
    let mut canvas = canvas(&client).await;
    canvas.set_theme(ThemeId::Pirate);
    assert_eq!(canvas.theme().connection_style, ConnectionStyle::HandDrawn);

    let first = canvas.scene();
    let second = canvas.scene();
    assert_eq!(first, second);
    assert_eq!(first.links.len(), 9);
    assert_eq!(first.nodes.len(), 11);

    let boss = first.nodes.iter().find(|n| n.id == "express-api").unwrap();
    assert_eq!(boss.visual.icon, NodeIcon::Skull);
}

#[tokio::test]
async fn test_pan_zoom_and_search() {
    let client = client().await;
    let mut canvas = canvas(&client).await;

    canvas.pointer_down(PointerTarget::Node("git-init".to_string()), 0.0, 0.0);
    canvas.pointer_move(50.0, 50.0);
    assert_eq!(canvas.camera().x, -200.0);
    canvas.pointer_up();

    canvas.pointer_down(PointerTarget::Canvas, 10.0, 10.0);
    canvas.pointer_move(40.0, -10.0);
    canvas.pointer_up();
    assert_eq!(canvas.camera().x, -170.0);
    assert_eq!(canvas.camera().y, -120.0);

    for _ in 0..10 {
        canvas.zoom_in();
    }
    assert_eq!(canvas.camera().zoom, 2.0);

    canvas.set_search("intro");
    assert_eq!(canvas.search_matches(), vec!["react-intro", "vue-intro"]);

    assert!(canvas.center());
    assert_eq!(canvas.selected_node().unwrap().id, "html-basics");
    assert_eq!(canvas.camera().x, 500.0 - 400.0 * 2.0);
}

#[tokio::test]
async fn test_planner_projection_from_dashboard_goal() {
    let client = client().await;
    let dashboard = client.fetch_dashboard().await.unwrap();

    let today = chrono::NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    let mut planner = PlannerView::demo(today);
    planner.set_simulated_minutes(90);

    let projection = planner.projection(&dashboard.goal);
    assert_eq!(projection.days_remaining, Some(17));
    assert_eq!(
        projection.finish_date,
        chrono::NaiveDate::from_ymd_opt(2026, 11, 2)
    );
}

#[test]
fn test_review_session_all_wrong() {
    let mut review = ReviewSession::new();
    review.start(ReviewFilter::All);
    while review.mode() == ReviewMode::Session {
        review.reveal();
        review.rate(Rating::Again);
    }
    assert_eq!(review.mode(), ReviewMode::Summary);
    assert_eq!(review.stats().correct, 0);
    assert_eq!(review.stats().xp_gained, 6);
}
