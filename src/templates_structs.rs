// Template context structures for Askama templates.

use askama::Template;

use crate::page::{SignupPage, element_ids};

/// The sign-up page. Templates read regions as `page.activities`, `page.options`, etc.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub page: SignupPage,
    pub csrf_token: String,
    pub ids: ElementIds,
}

impl IndexTemplate {
    pub fn new(page: SignupPage, csrf_token: String) -> Self {
        Self {
            page,
            csrf_token,
            ids: ElementIds::default(),
        }
    }
}

/// Element ids for the page regions, so markup and tests agree on them.
pub struct ElementIds {
    pub activities_list: &'static str,
    pub activity_select: &'static str,
    pub signup_form: &'static str,
    pub email_input: &'static str,
    pub message: &'static str,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            activities_list: element_ids::ACTIVITIES_LIST,
            activity_select: element_ids::ACTIVITY_SELECT,
            signup_form: element_ids::SIGNUP_FORM,
            email_input: element_ids::EMAIL_INPUT,
            message: element_ids::MESSAGE,
        }
    }
}

#[derive(Template)]
#[template(path = "errors/404.html")]
pub struct NotFoundTemplate;
