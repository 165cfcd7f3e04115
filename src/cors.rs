use rocket::{
    fairing::{Fairing, Info, Kind},
    http::Header,
    Request, Response, Route,
};

/// A fairing that permits cross-origin requests from any origin, with any
/// method and any header.
pub struct CorsFairing;

#[rocket::async_trait]
impl Fairing for CorsFairing {
    fn info(&self) -> Info {
        Info {
            name: "CORS",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _req: &'r Request<'_>, res: &mut Response<'r>) {
        res.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        res.set_header(Header::new("Access-Control-Allow-Methods", "*"));
        res.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

pub fn routes() -> Vec<Route> {
    routes![preflight]
}

/// Accept any preflight request; the fairing supplies the actual headers.
#[options("/<_..>")]
fn preflight() {}
