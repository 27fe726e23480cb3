use actix_session::Session;
use actix_web::{HttpResponse, Responder, post, web};

use crate::forms::ordering::SetOrderForm;
use crate::repository::SessionOrderStore;
use crate::services::{ServiceError, ordering as ordering_service};

#[post("/project/setorder/")]
/// Toggle the ordering of a column. The page reloads itself afterwards.
pub async fn set_order(session: Session, web::Form(form): web::Form<SetOrderForm>) -> impl Responder {
    let store = SessionOrderStore::new(session);

    match ordering_service::set_order(&store, form) {
        Ok(ordering) => {
            log::debug!("Ordering changed to {:?}", ordering.fields());
            HttpResponse::Accepted().finish()
        }
        Err(ServiceError::Form(message)) => HttpResponse::BadRequest().body(message),
        Err(err) => {
            log::error!("Failed to set order: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
