//! Koans about iteration: each, map/collect, select/find_all, find,
//! inject/reduce, and iterating things that are not arrays.

use super::KoanContext;
use koans_core::{koan_assert_eq, Capability, Iterable, KoanSuite, SuiteError};

/// Fixture read by the last koan
pub const EXAMPLE_FILE: &str = "example_file.txt";

pub fn register(suite: &mut KoanSuite, ctx: &KoanContext) -> Result<(), SuiteError> {
    let style = ctx.name_style;
    suite.register("test_each_is_a_method_on_arrays", move || {
        let methods = Vec::<i32>::new().method_names(style);
        koan_assert_eq!(true, methods.contains(&Capability::Each.display_name(style)));
        Ok(())
    })?;

    suite.register("test_iterating_with_each", || {
        let array = [1, 2, 3];
        let mut sum = 0;
        for item in array {
            sum += item;
        }
        koan_assert_eq!(6, sum);
        Ok(())
    })?;

    suite.register("test_each_can_use_closures_too", || {
        let array = [1, 2, 3];
        let mut sum = 0;
        array.iter().for_each(|item| sum += item);
        koan_assert_eq!(6, sum);
        Ok(())
    })?;

    suite.register("test_break_works_with_each_style_iterations", || {
        let array = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let mut sum = 0;
        for item in array {
            if item > 3 {
                break;
            }
            sum += item;
        }
        koan_assert_eq!(6, sum);

        let taken: i32 = array.iter().take_while(|&&item| item <= 3).sum();
        koan_assert_eq!(6, taken);
        Ok(())
    })?;

    suite.register("test_collect_transforms_elements_of_an_array", || {
        let array = [1, 2, 3];
        let new_array: Vec<i32> = array.iter().map(|item| item + 10).collect();
        koan_assert_eq!(vec![11, 12, 13], new_array);

        // collect is another name for map
        koan_assert_eq!(Capability::Map, Capability::Collect.canonical());
        Ok(())
    })?;

    suite.register("test_select_selects_certain_items_from_an_array", || {
        let array = [1, 2, 3, 4, 5, 6];
        let even_numbers: Vec<i32> = array.iter().copied().filter(|item| item % 2 == 0).collect();
        koan_assert_eq!(vec![2, 4, 6], even_numbers);

        // find_all is another name for select
        koan_assert_eq!(Capability::Select, Capability::FindAll.canonical());
        Ok(())
    })?;

    suite.register("test_find_locates_the_first_element_matching_a_criteria", || {
        let array = ["Jim", "Bill", "Clarence", "Doug", "Eli"];
        koan_assert_eq!(Some("Clarence"), array.iter().copied().find(|item| item.len() > 4));
        Ok(())
    })?;

    suite.register("test_inject_will_blow_your_mind", || {
        let result = [2, 3, 4].iter().fold(0, |sum, item| sum + item);
        koan_assert_eq!(9, result);

        let result2 = [2, 3, 4].iter().fold(1, |product, item| product * item);
        koan_assert_eq!(24, result2);

        // reduce seeds with the first element instead of an explicit start
        koan_assert_eq!(Some(6), [1, 2, 3].into_iter().reduce(|sum, item| sum + item));
        koan_assert_eq!(None, Vec::<i32>::new().into_iter().reduce(|sum, item| sum + item));
        Ok(())
    })?;

    let fixtures = ctx.fixtures.clone();
    suite.register(
        "test_all_iteration_methods_work_on_any_collection_not_just_arrays",
        move || {
            // Ranges act like a collection
            let range = 1..=3;
            koan_assert_eq!(true, range.supports(Capability::Map));
            let result: Vec<i32> = range.map(|item| item + 10).collect();
            koan_assert_eq!(vec![11, 12, 13], result);

            // Files act like a collection of lines
            let upcase_lines = fixtures.with_lines(EXAMPLE_FILE, |lines| {
                let mut upcased = Vec::new();
                for line in lines {
                    upcased.push(line?.trim().to_uppercase());
                }
                Ok(upcased)
            })?;
            let upcase_lines: Vec<&str> = upcase_lines.iter().map(String::as_str).collect();
            koan_assert_eq!(vec!["THIS", "IS", "A", "TEST"], upcase_lines);
            Ok(())
        },
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::koans::registered;
    use koans_core::{FixtureDir, KoanRunner, NameStyle, Outcome};
    use std::path::Path;

    fn context(style: NameStyle) -> KoanContext {
        KoanContext {
            name_style: style,
            fixtures: FixtureDir::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")),
        }
    }

    #[test]
    fn test_all_iteration_koans_pass() {
        let suite = registered(&context(NameStyle::Symbol)).unwrap();
        let report = KoanRunner::new().run_all(&suite);
        assert_eq!(report.len(), 9);
        assert!(report.all_passed(), "{:?}", report.status_lines());
    }

    #[test]
    fn test_string_name_style_passes_too() {
        let suite = registered(&context(NameStyle::String)).unwrap();
        assert!(KoanRunner::new().run_all(&suite).all_passed());
    }

    #[test]
    fn test_missing_fixture_errors_only_the_file_koan() {
        let ctx = KoanContext {
            name_style: NameStyle::Symbol,
            fixtures: FixtureDir::new("/nonexistent/fixtures"),
        };
        let report = KoanRunner::new().run_all(&registered(&ctx).unwrap());

        let unpassed: Vec<_> = report
            .iter()
            .filter(|r| !r.outcome.is_pass())
            .collect();
        assert_eq!(unpassed.len(), 1);
        assert_eq!(
            unpassed[0].name,
            "test_all_iteration_methods_work_on_any_collection_not_just_arrays"
        );
        assert!(matches!(unpassed[0].outcome, Outcome::Errored(_)));
    }

    #[test]
    fn test_first_koan_is_each() {
        let suite = registered(&context(NameStyle::Symbol)).unwrap();
        assert_eq!(suite.names().next(), Some("test_each_is_a_method_on_arrays"));
    }
}
