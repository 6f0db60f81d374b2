mod extension_tests;
mod operation_tests;
mod printer_tests;
mod selection_tests;
mod syntax_error_tests;
mod type_annotation_tests;
mod utils;
