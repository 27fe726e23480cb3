#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
#[cfg(feature = "server")]
use actix_web::cookie::Key;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::InMemoryTaskRepository;
#[cfg(feature = "server")]
use crate::routes::ordering::set_order;
#[cfg(feature = "server")]
use crate::routes::tasks::{
    show_group_task_list, show_project, show_project_group, show_task_list,
};

pub mod domain;
pub mod dto;
pub mod events;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
pub mod pagination;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let mut repo = InMemoryTaskRepository::from_csv_path(&server_config.tasks_csv)
        .map_err(|e| std::io::Error::other(format!("Failed to load tasks: {e}")))?;
    if let Some(groups_csv) = &server_config.groups_csv {
        repo = repo
            .with_groups_csv_path(groups_csv)
            .map_err(|e| std::io::Error::other(format!("Failed to load project groups: {e}")))?;
    }

    // Orderings live in the signed session cookie.
    let secret_key = Key::try_from(server_config.secret.as_bytes())
        .map_err(|e| std::io::Error::other(format!("Invalid session secret: {e}")))?;

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(server_config.session_secure)
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(set_order)
            .service(show_project)
            .service(show_task_list)
            .service(show_project_group)
            .service(show_group_task_list)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
