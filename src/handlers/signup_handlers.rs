use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::auth::csrf;
use crate::errors::{AppError, render};
use crate::page::{loader, submitter, SignupPage};
use crate::state::PortalState;
use crate::templates_structs::IndexTemplate;

/// Form data from both the sign-up form and the per-participant remove buttons.
#[derive(Debug, Deserialize)]
pub struct ParticipantForm {
    #[serde(default)]
    pub activity: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub csrf_token: String,
}

/// Load the catalog into `page` and render it.
async fn finish(
    state: &PortalState,
    session: &Session,
    mut page: SignupPage,
) -> Result<HttpResponse, AppError> {
    loader::load(&state.api, &mut page).await;
    let csrf_token = csrf::get_or_create_token(session)?;
    render(IndexTemplate::new(page, csrf_token))
}

pub async fn index(
    state: web::Data<PortalState>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let page = SignupPage::new(state.locale);
    finish(&state, &session, page).await
}

pub async fn signup_submit(
    state: web::Data<PortalState>,
    session: Session,
    form: web::Form<ParticipantForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let mut page = SignupPage::new(state.locale);
    submitter::submit(&state.api, &mut page, &form.activity, &form.email).await;
    finish(&state, &session, page).await
}

pub async fn unregister_submit(
    state: web::Data<PortalState>,
    session: Session,
    form: web::Form<ParticipantForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let mut page = SignupPage::new(state.locale);
    submitter::unregister(&state.api, &mut page, &form.activity, &form.email).await;
    finish(&state, &session, page).await
}
