pub(crate) mod atoms;
pub(crate) mod detail;
pub(crate) mod form_fields;
pub(crate) mod login;
pub(crate) mod modals;
pub(crate) mod pagination;
pub(crate) mod resource_list;
pub(crate) mod shell;
pub(crate) mod toast;
