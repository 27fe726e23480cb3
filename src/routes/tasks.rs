use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use tera::{Context, Tera};

use crate::domain::project::ProjectRef;
use crate::domain::types::PageType;
use crate::dto::tasks::TaskListParams;
use crate::pagination::strip_query;
use crate::repository::{InMemoryTaskRepository, SessionOrderStore};
use crate::routes::render_template;
use crate::services::{ServiceError, projects as projects_service, tasks as tasks_service};

#[get("/project/{project}")]
/// Dashboard of a single project.
pub async fn show_project(
    project: web::Path<String>,
    repo: web::Data<InMemoryTaskRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_dashboard(ProjectRef::project(project.into_inner()), &repo, &tera)
}

#[get("/projectgroup/{group}")]
/// Dashboard of a project group.
pub async fn show_project_group(
    group: web::Path<String>,
    repo: web::Data<InMemoryTaskRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_dashboard(ProjectRef::group(group.into_inner()), &repo, &tera)
}

#[get("/project/{project}/{page_type}")]
/// Render one page of a project's task list.
pub async fn show_task_list(
    req: HttpRequest,
    path: web::Path<(String, String)>,
    params: web::Query<TaskListParams>,
    repo: web::Data<InMemoryTaskRepository>,
    session: Session,
    tera: web::Data<Tera>,
) -> impl Responder {
    let (project, page_type) = path.into_inner();
    render_task_list(
        &req,
        ProjectRef::project(project),
        &page_type,
        params.into_inner(),
        &repo,
        session,
        &tera,
    )
}

#[get("/projectgroup/{group}/{page_type}")]
/// Render one page of the task list of every project in a group.
pub async fn show_group_task_list(
    req: HttpRequest,
    path: web::Path<(String, String)>,
    params: web::Query<TaskListParams>,
    repo: web::Data<InMemoryTaskRepository>,
    session: Session,
    tera: web::Data<Tera>,
) -> impl Responder {
    let (group, page_type) = path.into_inner();
    render_task_list(
        &req,
        ProjectRef::group(group),
        &page_type,
        params.into_inner(),
        &repo,
        session,
        &tera,
    )
}

fn render_dashboard(
    project: ProjectRef,
    repo: &InMemoryTaskRepository,
    tera: &Tera,
) -> HttpResponse {
    match projects_service::load_dashboard(repo, &project) {
        Ok(data) => {
            let mut context = Context::new();
            context.insert("name", &data.name);
            context.insert("is_group", &data.is_group);
            context.insert("members", &data.members);
            context.insert("bugtriagecount", &data.bug_triage_count);
            context.insert("lists", &data.lists);

            render_template(tera, "tasks/dashboard.html", &context)
        }
        Err(err) => error_response(err),
    }
}

fn render_task_list(
    req: &HttpRequest,
    project: ProjectRef,
    page_type: &str,
    params: TaskListParams,
    repo: &InMemoryTaskRepository,
    session: Session,
    tera: &Tera,
) -> HttpResponse {
    let Ok(page_type) = page_type.parse::<PageType>() else {
        return HttpResponse::NotFound().finish();
    };

    let orders = SessionOrderStore::new(session);
    let base_url = strip_query(req.path());

    match tasks_service::load_task_list(repo, &orders, &project, page_type, params, base_url) {
        Ok(data) => {
            let mut context = Context::new();
            context.insert("title", data.title);
            context.insert("page_type", &data.page_type);
            context.insert("name", &data.name);
            context.insert("is_group", &data.is_group);
            context.insert("path", &data.path);
            context.insert("is_bug", &data.is_bug);
            context.insert("bugtriagecount", &data.bug_triage_count);
            context.insert("tasks", &data.tasks);
            context.insert("arrow_object", &data.arrows);

            render_template(tera, "tasks/index.html", &context)
        }
        Err(err) => error_response(err),
    }
}

fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound(message) => {
            log::warn!("Requested page does not exist: {message}");
            HttpResponse::NotFound().finish()
        }
        ServiceError::BadRequest(message) => {
            log::warn!("Rejected task list request: {message}");
            HttpResponse::BadRequest().body(message)
        }
        err => {
            log::error!("Failed to load task list: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
