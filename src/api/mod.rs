pub mod coerce;
pub mod request;

pub use coerce::coerce_int;
pub use request::JsonBody;
