use askama::Template;

use crate::error::RenderError;
use crate::templates::ResultsTableTemplate;

use super::state::RenderState;
use super::target::RenderTarget;
use super::NO_RESULTS_MESSAGE;

/// Contents of the alert region and the results container of the page.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HtmlFragment {
    pub alert: String,
    pub results_html: String,
}

impl RenderTarget for HtmlFragment {
    fn clear(&mut self) {
        self.alert.clear();
        self.results_html.clear();
    }

    fn render(&mut self, state: &RenderState) -> Result<(), RenderError> {
        self.clear();
        match state {
            RenderState::Empty => {}
            RenderState::Error(message) => self.alert = message.clone(),
            RenderState::Results(rows) => {
                self.results_html = ResultsTableTemplate {
                    rows,
                    empty_message: NO_RESULTS_MESSAGE,
                }
                .render()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ProductRow;

    fn row(id: &str, name: &str, price: &str) -> ProductRow {
        ProductRow { id: id.into(), name: name.into(), price: price.into() }
    }

    #[test]
    fn test_results_render_one_row_per_product() {
        let mut frag = HtmlFragment::default();
        let state = RenderState::Results(vec![row("1", "Vanilla Ice Cream", "$3.50"), row("2", "Mint", "$1.00")]);
        frag.render(&state).unwrap();
        assert!(frag.alert.is_empty());
        assert_eq!(frag.results_html.matches("<tr class=\"product-row\">").count(), 2);
        assert!(frag.results_html.contains("Vanilla Ice Cream"));
        assert!(frag.results_html.contains("$3.50"));
        let first = frag.results_html.find("Vanilla").unwrap();
        let second = frag.results_html.find("Mint").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_empty_results_render_message_without_table() {
        let mut frag = HtmlFragment::default();
        frag.render(&RenderState::Results(vec![])).unwrap();
        assert!(frag.results_html.contains(NO_RESULTS_MESSAGE));
        assert!(!frag.results_html.contains("<table"));
    }

    #[test]
    fn test_error_replaces_previous_results() {
        let mut frag = HtmlFragment::default();
        frag.render(&RenderState::Results(vec![row("1", "a", "$1.00")])).unwrap();
        frag.render(&RenderState::Error("nope".into())).unwrap();
        assert_eq!(frag.alert, "nope");
        assert!(frag.results_html.is_empty());
    }

    #[test]
    fn test_names_are_escaped() {
        let mut frag = HtmlFragment::default();
        frag.render(&RenderState::Results(vec![row("1", "<script>x</script>", "$1.00")])).unwrap();
        assert!(!frag.results_html.contains("<script>"));
        assert!(frag.results_html.contains("&lt;script&gt;"));
    }
}
