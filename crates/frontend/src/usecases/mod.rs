pub mod u501_simulate_upload;
pub mod u502_translate_document;
pub mod u503_consult_assistant;
