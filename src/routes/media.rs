use crate::media::MediaLister;
use crate::models::media::MediaListing;
use actix_web::{HttpResponse, web};

/// `GET /api/media`. A failed directory read is logged and answered with an
/// empty list, never with an error status.
pub async fn list_media(lister: web::Data<MediaLister>) -> HttpResponse {
    let files = match lister.list() {
        Ok(files) => files,
        Err(e) => {
            log::error!("error reading media folder: {e}");
            Vec::new()
        }
    };
    HttpResponse::Ok().json(MediaListing { files })
}
