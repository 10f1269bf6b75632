pub mod helpers;
pub mod top_k;
