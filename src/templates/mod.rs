pub mod results_table_template;
pub mod top_k_page_template;
pub mod top_k_regions_template;

pub use results_table_template::ResultsTableTemplate;
pub use top_k_page_template::TopKPageTemplate;
pub use top_k_regions_template::TopKRegionsTemplate;
