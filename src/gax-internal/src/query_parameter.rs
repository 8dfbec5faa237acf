// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines traits and helpers to serialize query parameters.
//!
//! The generated code represents query parameters as optional fields in the
//! options structs. A missing value produces no query parameter. A list
//! produces one `name=value` pair per element.
//!
//! The types are not intended for application developers to use.

/// [QueryParameter] is a trait representing types that can be used as a query
/// parameter.
pub trait QueryParameter {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder;
}

/// Formats a single query value.
pub trait QueryValue {
    fn to_query_value(&self) -> String;
}

impl<T: QueryValue> QueryParameter for Option<T> {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        match self {
            None => builder,
            Some(v) => builder.query(&[(name, v.to_query_value())]),
        }
    }
}

impl<T: QueryValue> QueryParameter for &Option<T> {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        match self {
            None => builder,
            Some(v) => builder.query(&[(name, v.to_query_value())]),
        }
    }
}

impl<T: QueryValue> QueryParameter for &Vec<T> {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        self.iter()
            .fold(builder, |b, v| b.query(&[(name, v.to_query_value())]))
    }
}

impl QueryValue for String {
    fn to_query_value(&self) -> String {
        self.clone()
    }
}

impl QueryValue for &str {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

macro_rules! display_query_value {
    ($($t:ty),*) => {
        $(
            impl QueryValue for $t {
                fn to_query_value(&self) -> String {
                    format!("{self}")
                }
            }
        )*
    };
}

display_query_value!(bool, i32, i64, u32, u64, f64);

#[cfg(test)]
mod tests {
    use super::*;
    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn split_query(r: &reqwest::Request) -> Vec<&str> {
        r.url()
            .query()
            .unwrap_or_default()
            .split("&")
            .filter(|p| !p.is_empty())
            .collect()
    }

    fn builder() -> Result<reqwest::RequestBuilder, reqwest::Error> {
        Ok(reqwest::Client::builder()
            .build()?
            .get("https://iam.cloud.ibm.com/v1/unused"))
    }

    #[test]
    fn none() -> TestResult {
        let value: Option<String> = None;
        let request = value.add(builder()?, "name").build()?;
        assert_eq!(split_query(&request), Vec::<&str>::new());
        Ok(())
    }

    #[test]
    fn string() -> TestResult {
        let value = Some("abc 123".to_string());
        let request = value.add(builder()?, "name").build()?;
        assert_eq!(split_query(&request), vec!["name=abc+123"]);
        Ok(())
    }

    #[test]
    fn by_reference() -> TestResult {
        let value = Some("abc");
        let request = (&value).add(builder()?, "name").build()?;
        assert_eq!(split_query(&request), vec!["name=abc"]);
        assert_eq!(value, Some("abc"));
        Ok(())
    }

    #[test]
    fn integers() -> TestResult {
        let request = Some(38_i64).add(builder()?, "pagesize");
        let request = Some(-7_i32).add(request, "a");
        let request = Some(42_u32).add(request, "b");
        let request = Some(u64::MAX).add(request, "c").build()?;
        assert_eq!(
            split_query(&request),
            vec![
                "pagesize=38",
                "a=-7",
                "b=42",
                &format!("c={}", u64::MAX)
            ]
        );
        Ok(())
    }

    #[test]
    fn number() -> TestResult {
        let request = Some(7.5_f64).add(builder()?, "name").build()?;
        assert_eq!(split_query(&request), vec!["name=7.5"]);
        Ok(())
    }

    #[test]
    fn boolean() -> TestResult {
        let request = Some(true).add(builder()?, "include_history");
        let request = Some(false).add(request, "include_activity").build()?;
        assert_eq!(
            split_query(&request),
            vec!["include_history=true", "include_activity=false"]
        );
        Ok(())
    }

    #[test]
    fn repeated() -> TestResult {
        let values = vec!["a".to_string(), "b".to_string()];
        let request = (&values).add(builder()?, "name").build()?;
        assert_eq!(split_query(&request), vec!["name=a", "name=b"]);

        let values: Vec<String> = Vec::new();
        let request = (&values).add(builder()?, "name").build()?;
        assert_eq!(split_query(&request), Vec::<&str>::new());
        Ok(())
    }
}
