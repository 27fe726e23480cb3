use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, http::StatusCode, test, web};
use tera::Tera;

use pushkind_tasklist::domain::project::ProjectGroup;
use pushkind_tasklist::domain::task::Task;
use pushkind_tasklist::domain::types::{NonEmptyString, TaskStatus};
use pushkind_tasklist::dto::ordering::SET_ORDER_PATH;
use pushkind_tasklist::repository::InMemoryTaskRepository;
use pushkind_tasklist::routes::ordering::set_order;
use pushkind_tasklist::routes::tasks::{
    show_group_task_list, show_project, show_project_group, show_task_list,
};

fn repo() -> InMemoryTaskRepository {
    let mut tasks: Vec<Task> = (1..=20)
        .map(|id| {
            Task::try_new(
                id,
                format!("Bug {id:02}"),
                "nova",
                TaskStatus::Todo,
                true,
                (id % 4 + 1) as u8,
            )
            .unwrap()
        })
        .collect();
    tasks.push(Task::try_new(21, "Untriaged", "nova", TaskStatus::Todo, true, 0).unwrap());
    tasks.push(Task::try_new(22, "Ring rebalance", "swift", TaskStatus::Review, false, 2).unwrap());
    tasks.push(Task::try_new(23, "Lost object", "swift", TaskStatus::Todo, true, 0).unwrap());

    let mut group = ProjectGroup::new(NonEmptyString::new("core").unwrap());
    group.add_member(NonEmptyString::new("nova").unwrap());
    group.add_member(NonEmptyString::new("swift").unwrap());

    InMemoryTaskRepository::new(tasks).with_groups([group])
}

fn tera() -> Tera {
    Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*")).unwrap()
}

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .wrap(
                    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
                        .cookie_secure(false)
                        .build(),
                )
                .service(set_order)
                .service(show_project)
                .service(show_task_list)
                .service(show_project_group)
                .service(show_group_task_list)
                .app_data(web::Data::new(tera()))
                .app_data(web::Data::new(repo())),
        )
        .await
    };
}

#[actix_web::test]
async fn renders_requested_page_with_links() {
    let app = app!();

    let req = test::TestRequest::get()
        .uri("/project/nova/bugtasks?page_size=5&page_number=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("5 tasks per page"));
    assert!(body.contains("id=\"page-link-4\""));
    assert!(!body.contains("id=\"page-link-5\""));
    assert!(body.contains("bugtasks?page_size=5&amp;page_number=0"));
}

#[actix_web::test]
async fn rows_show_status_and_priority_labels() {
    let app = app!();

    let req = test::TestRequest::get()
        .uri("/project/swift/featuretasks")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("Ring rebalance"));
    assert!(body.contains("In review"));
    assert!(body.contains("class=\"badge badge-success\""));
    assert!(body.contains(">Medium</span>"));
}

#[actix_web::test]
async fn page_past_the_end_renders_last_page() {
    let app = app!();

    // 21 bugs in nova: five pages of five
    let req = test::TestRequest::get()
        .uri("/project/nova/bugtasks?page_size=5&page_number=10")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("class=\"active disabled\"><a href=\"&#x2F;project&#x2F;nova&#x2F;bugtasks?page_size=5&amp;page_number=4\" id=\"page-link-4\""));
    assert!(body.contains("id=\"page-link-1\""));
    assert!(!body.contains("No tasks."));
}

#[actix_web::test]
async fn project_dashboard_shows_triage_count() {
    let app = app!();

    let req = test::TestRequest::get().uri("/project/nova").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("Active feature tasks"));
    assert!(body.contains("project&#x2F;nova&#x2F;bugtriage"));
    assert!(body.contains("<span class=\"badge\" id=\"bugtriagecount\">1</span>"));
    assert!(!body.contains("group-members"));
}

#[actix_web::test]
async fn group_dashboard_aggregates_members() {
    let app = app!();

    let req = test::TestRequest::get().uri("/projectgroup/core").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("project group"));
    assert!(body.contains("projectgroup&#x2F;core&#x2F;bugtasks"));
    assert!(body.contains("<span class=\"badge\" id=\"bugtriagecount\">2</span>"));
}

#[actix_web::test]
async fn group_list_covers_every_member() {
    let app = app!();

    let req = test::TestRequest::get()
        .uri("/projectgroup/core/bugtriage?page_size=-1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("Untriaged"));
    assert!(body.contains("Lost object"));
    assert!(body.contains("projectgroup&#x2F;core&#x2F;bugtriage?page_size=-1&amp;page_number=0"));
}

#[actix_web::test]
async fn unknown_group_is_not_found() {
    let app = app!();

    for uri in ["/projectgroup/ghost", "/projectgroup/ghost/bugtasks"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[actix_web::test]
async fn invalid_pagination_is_rejected() {
    let app = app!();

    for uri in [
        "/project/nova/bugtasks?page_size=0",
        "/project/nova/bugtasks?page_size=-3",
        "/project/nova/bugtasks?page_number=-1",
        "/project/nova/bugtasks?page_size=many",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[actix_web::test]
async fn unknown_page_type_is_not_found() {
    let app = app!();

    let req = test::TestRequest::get()
        .uri("/project/nova/stories")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn set_order_is_accepted_and_applied() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri(SET_ORDER_PATH)
        .set_form([("page_type", "bugtasks"), ("order_field", "id")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::ACCEPTED);

    let cookie = resp
        .response()
        .cookies()
        .next()
        .expect("session cookie")
        .into_owned();

    let req = test::TestRequest::get()
        .uri("/project/nova/bugtasks?page_size=3&page_number=0")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("icon-arrow-down"));
    // id descending puts the newest task first
    let first = body.find("Untriaged").expect("task 21 on first page");
    let second = body.find("Bug 20").expect("task 20 on first page");
    assert!(first < second);
}

#[actix_web::test]
async fn set_order_rejects_unknown_field() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri(SET_ORDER_PATH)
        .set_form([("page_type", "bugtasks"), ("order_field", "story__priority")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
