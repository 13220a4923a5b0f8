#[cfg(test)]
mod tests {
    use glob::glob;
    use mandelbrot_explorer::cli::swatch::SwatchParams;
    use mandelbrot_explorer::core::explorer::ExplorerParams;
    use more_asserts::assert_gt;
    use serde::de::DeserializeOwned;
    use std::any::type_name;
    use std::fs;

    /// Returns the number of files parsed, so callers can catch an empty
    /// (mistyped) directory as well as a malformed file.
    fn parse_all_parameter_files_or_panic<T: DeserializeOwned>(directory: &str) -> usize {
        let pattern = format!("{}/**/*.json", directory);
        let mut count = 0;

        for entry in glob(&pattern).expect("Failed to read glob pattern") {
            match entry {
                Ok(path) => {
                    let content = fs::read_to_string(&path)
                        .unwrap_or_else(|_| panic!("Failed to read file: {:?}", path));

                    let result: Result<T, _> = serde_json::from_str(&content);

                    match result {
                        Ok(_) => count += 1,
                        Err(err) => {
                            panic!(
                                "Failed to parse JSON file: {:?} as parameter type: `{}`.\n\n{:?}\n",
                                path,
                                type_name::<T>(),
                                err
                            );
                        }
                    }
                }
                Err(e) => panic!("Failed to read path: {:?}. Check permissions.", e),
            }
        }
        count
    }

    #[test]
    fn test_ensure_all_shipped_param_files_can_be_parsed() {
        assert_gt!(
            parse_all_parameter_files_or_panic::<ExplorerParams>("params/render"),
            0
        );
        assert_gt!(
            parse_all_parameter_files_or_panic::<SwatchParams>("params/swatch"),
            0
        );
    }

    #[test]
    fn test_default_params_round_trip_through_json() {
        let params = ExplorerParams::default();
        let encoded = serde_json::to_string(&params).unwrap();
        let decoded: ExplorerParams = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded.view, params.view);
        assert_eq!(decoded.palette, params.palette);
        assert_eq!(
            decoded.convergence.max_iter_count,
            params.convergence.max_iter_count
        );
        assert_eq!(
            decoded.convergence.bailout_radius,
            params.convergence.bailout_radius
        );
    }
}
