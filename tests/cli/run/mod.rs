mod email_contract;
mod prompt_preview_contract;
mod writes_document_contract;
