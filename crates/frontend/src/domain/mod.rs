pub mod a002_case;
pub mod a003_annotation;
pub mod a004_workflow;
