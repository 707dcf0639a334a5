pub mod advanced_filter_form;
pub mod clause_row;
pub mod value_input_field;
pub mod frequency_selection_list;
