//! Client-side routes for the practice flow.
//!
//! Four screens in sequence: home → questionnaire → scenario selection →
//! chat. Navigation is client-side only.

use dioxus::prelude::*;

mod chat;
mod home;
mod questionnaire;
mod scenarios;

pub use chat::ChatRoute;
pub use home::HomeRoute;
pub use questionnaire::QuestionnaireRoute;
pub use scenarios::ScenariosRoute;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[route("/")]
    HomeRoute {},
    #[route("/questionnaire")]
    QuestionnaireRoute {},
    #[route("/scenarios")]
    ScenariosRoute {},
    #[route("/chat")]
    ChatRoute {},
}
