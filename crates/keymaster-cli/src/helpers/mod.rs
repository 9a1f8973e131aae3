//! Interactive prompt helpers.

mod input;

pub use input::{
    prompt_confirm, prompt_input, prompt_optional, prompt_select, prompt_u32, proto_password,
    select_label,
};
