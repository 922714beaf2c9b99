mod page_templates;

pub use page_templates::PageTemplates;
