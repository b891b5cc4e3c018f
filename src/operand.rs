// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Operands of print-style and println-style emission.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;

/// A value passed to print-style or println-style emission.
///
/// Print-style emission puts a space between two adjacent operands when neither of them is a
/// string; string operands are written as is. Every `'static` [`Display`](fmt::Display) type
/// is an operand. The string types are `&'static str`, [`String`] and `Cow<'static, str>`.
///
/// # Examples
///
/// ```
/// use splitlog::Operand;
///
/// assert!("text".is_string());
/// assert!(String::from("text").is_string());
/// assert!(!42.is_string());
/// assert!(!'c'.is_string());
/// ```
pub trait Operand: fmt::Display {
    /// Whether this operand is a string.
    fn is_string(&self) -> bool;
}

impl<T: fmt::Display + Any> Operand for T {
    fn is_string(&self) -> bool {
        let any = self as &dyn Any;
        any.is::<&'static str>() || any.is::<String>() || any.is::<Cow<'static, str>>()
    }
}

/// Concatenate operands, spacing only adjacent non-strings.
pub(crate) fn concat(args: &[&dyn Operand]) -> String {
    let mut body = String::new();
    let mut prev_is_string = true;
    for (i, arg) in args.iter().enumerate() {
        let is_string = (*arg).is_string();
        if i > 0 && !prev_is_string && !is_string {
            body.push(' ');
        }
        push(&mut body, *arg);
        prev_is_string = is_string;
    }
    body
}

/// Join operands with single spaces.
pub(crate) fn join(args: &[&dyn Operand]) -> String {
    let mut body = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            body.push(' ');
        }
        push(&mut body, *arg);
    }
    body
}

fn push(body: &mut String, arg: &dyn Operand) {
    use std::fmt::Write;
    let _ = write!(body, "{arg}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_spaces_adjacent_non_strings() {
        assert_eq!(concat(&[]), "");
        assert_eq!(concat(&[&1, &2, &"x", &3]), "1 2x3");
        assert_eq!(concat(&[&"a", &1, &"b"]), "a1b");
        assert_eq!(concat(&[&1.5, &'c', &true]), "1.5 c true");
        assert_eq!(
            concat(&[&String::from("id="), &7, &Cow::Borrowed("/"), &8]),
            "id=7/8"
        );
    }

    #[test]
    fn test_join_spaces_everything() {
        assert_eq!(join(&[]), "");
        assert_eq!(join(&[&"a"]), "a");
        assert_eq!(join(&[&1, &2.5, &'c', &"d"]), "1 2.5 c d");
    }
}
