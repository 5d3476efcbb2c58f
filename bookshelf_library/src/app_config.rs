use paperclip::actix::web;

use crate::handlers;

pub fn config_app(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/health").route(web::get().to(handlers::health)))
        .service(
            web::resource("/books")
                .route(web::get().to(handlers::get_books))
                .route(web::post().to(handlers::save_library)),
        );
}
