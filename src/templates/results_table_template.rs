use askama::Template;

use crate::render::ProductRow;

#[derive(Template)]
#[template(path = "partials/results_table.html")]
pub struct ResultsTableTemplate<'a> {
    pub rows: &'a [ProductRow],
    pub empty_message: &'a str,
}
