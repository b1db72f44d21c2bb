/// Services offered on the quote form even when the page markup omits them.
pub const POPULAR_SERVICES: [&str; 5] = [
    "Window Cleaning",
    "Carpet Cleaning",
    "Upholstery Cleaning",
    "Spring Cleaning",
    "Post-Construction Cleaning",
];

/// Appends every popular service missing from `options`, keeping existing order.
pub fn with_popular_services(mut options: Vec<String>) -> Vec<String> {
    for service in POPULAR_SERVICES {
        if !options.iter().any(|existing| existing == service) {
            options.push(service.to_string());
        }
    }
    options
}
