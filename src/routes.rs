use actix_files::Files;
use actix_web::{
    dev::HttpServiceFactory,
    get,
    http::header::ContentType,
    middleware::DefaultHeaders,
    web::{self, Data, Path, ServiceConfig},
    Either,
    HttpRequest,
    HttpResponse,
};
use maud::Markup;

use crate::{pattern_library, renderers, state::State};

const YEAR_IN_SECONDS: isize = 60 * 60 * 24 * 365;

#[get("/")]
pub async fn get_home(state: Data<State>) -> Markup {
    renderers::home(&state)
}

#[get("/about")]
pub async fn get_about(state: Data<State>) -> Markup {
    renderers::about(&state)
}

#[get("/case-studies")]
pub async fn get_case_studies(state: Data<State>) -> Markup {
    renderers::case_studies(&state)
}

#[get("/case-studies/{id}")]
pub async fn get_case_study(
    req: HttpRequest,
    id: Path<String>,
    state: Data<State>,
) -> Either<Markup, HttpResponse> {
    match state.studies.get(&id) {
        Some(study) => Either::Left(renderers::case_study(&state, study)),
        None => {
            tracing::info!(id = %id, "case study not found");
            Either::Right(not_found_response(renderers::case_study_not_found(&state, req.path())))
        }
    }
}

#[get("/entrata-pattern-library")]
pub async fn get_pattern_library(state: Data<State>) -> Markup {
    pattern_library::pattern_library(&state)
}

pub async fn not_found(req: HttpRequest, state: Data<State>) -> HttpResponse {
    tracing::debug!(path = req.path(), "no route");
    not_found_response(renderers::not_found(&state, req.path()))
}

fn not_found_response(markup: Markup) -> HttpResponse {
    HttpResponse::NotFound()
        .content_type(ContentType::html())
        .body(markup.into_string())
}

fn files(mount: &str, dir: &str) -> impl HttpServiceFactory {
    web::scope(mount)
        .service(Files::new("/", dir).use_last_modified(true))
        .wrap(
            DefaultHeaders::new()
                .add(("Cache-Control", format!("max-age={YEAR_IN_SECONDS}").as_str()))
        )
}

/// Registers every page, plus the static and asset directories when the
/// config names them.
pub fn configure(state: State) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg| {
        let paths = state.config.paths.clone();

        cfg.app_data(Data::new(state));

        if let Some(dir) = &paths.static_dir {
            cfg.service(files("/static", dir));
        }
        if let Some(dir) = &paths.assets_dir {
            cfg.service(files(&paths.assets_url, dir));
        }

        cfg.service(get_home)
            .service(get_about)
            .service(get_case_studies)
            .service(get_case_study)
            .service(get_pattern_library)
            .default_service(web::to(not_found));
    }
}
