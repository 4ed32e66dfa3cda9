pub mod button;
pub mod card;
pub mod form_select;
pub mod input;
pub mod label;
pub mod page_header;
pub mod pagination;
pub mod search_bar;
pub mod skeleton;

pub use button::*;
pub use card::*;
pub use form_select::*;
pub use input::*;
pub use label::*;
pub use page_header::*;
pub use pagination::*;
pub use search_bar::*;
pub use skeleton::*;
