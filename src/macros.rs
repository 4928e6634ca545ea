// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Literal, const or variable
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! strs {
    // Vec<String> from a list of &str (headers, fixtures)
    ($($item:expr),* $(,)?) => {
        vec![$( ::std::string::String::from($item) ),*]
    };
}
