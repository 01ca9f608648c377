//! Parser for a single format specifier
//!
//! Parsing starts on a `%` and stops as soon as a conversion character, an unrecognized
//! character, or a complete dictionary key has been consumed. Flags, width, precision and
//! length modifiers may appear in any order before that point.
//!

use crate::error::{Error, Result};
use crate::flags::FormatFlags;
use crate::types::{Arg, ArgType, NumericStyle, Size, Spec};

/// Read position inside a format string
///
/// Always sits on a char boundary since it only moves by whole characters.
#[derive(Debug, Clone, Copy)]
struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str, pos: usize) -> Self {
        Cursor { text, pos }
    }

    fn position(&self) -> usize {
        self.pos
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume `expected` if it is the next character.
    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }
}

/// Resolution state of a positional argument reference
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum ArgIndex {
    #[default]
    Unset,
    /// A `*` was seen and the next `N$` belongs to it
    Awaiting,
    Resolved(u8),
}

/// Width or precision while it is being parsed
#[derive(Debug, Default, Clone, Copy)]
struct ArgSlot {
    value: Option<u32>,
    index: ArgIndex,
}

impl ArgSlot {
    fn is_unset(&self) -> bool {
        self.value.is_none() && self.index == ArgIndex::Unset
    }

    fn resolve(self) -> Option<Arg> {
        match (self.index, self.value) {
            (ArgIndex::Resolved(index), _) => Some(Arg::Index(index)),
            (_, Some(value)) => Some(Arg::Value(value)),
            (ArgIndex::Awaiting, None) => Some(Arg::Next),
            (ArgIndex::Unset, None) => None,
        }
    }
}

/// A dictionary key being collected, `%[key]@` or `%#@key@`
#[derive(Debug, Clone, Copy)]
struct KeyRun {
    start: usize,
    bracketed: bool,
    closed_at: Option<usize>,
}

impl KeyRun {
    fn bracketed(start: usize) -> Self {
        KeyRun {
            start,
            bracketed: true,
            closed_at: None,
        }
    }

    fn entity(start: usize) -> Self {
        KeyRun {
            start,
            bracketed: false,
            closed_at: None,
        }
    }
}

enum Step {
    Continue,
    Done,
}

struct SpecParser<'a> {
    cursor: Cursor<'a>,
    spec: Spec,
    width: ArgSlot,
    precision: ArgSlot,
    seen_dot: bool,
    seen_sharp: bool,
    seen_open_bracket: bool,
    key: Option<KeyRun>,
}

impl<'a> SpecParser<'a> {
    fn new(format: &'a str, location: usize) -> Self {
        SpecParser {
            cursor: Cursor::new(format, location),
            spec: Spec {
                location,
                ..Default::default()
            },
            width: ArgSlot::default(),
            precision: ArgSlot::default(),
            seen_dot: false,
            seen_sharp: false,
            seen_open_bracket: false,
            key: None,
        }
    }

    fn run(mut self) -> Result<(Spec, usize)> {
        while let Some(c) = self.cursor.peek() {
            let step = match self.key {
                Some(key) => self.key_char(key, c),
                None => self.grammar_char(c)?,
            };
            if let Step::Done = step {
                break;
            }
        }
        Ok(self.finish())
    }

    fn finish(mut self) -> (Spec, usize) {
        let end = self.cursor.position();
        self.spec.width = self.width.resolve();
        self.spec.precision = self.precision.resolve();
        self.spec.length = end - self.spec.location;
        (self.spec, end)
    }

    fn key_char(&mut self, mut key: KeyRun, c: char) -> Step {
        if c.is_ascii_alphanumeric() || c == '_' {
            self.cursor.bump();
            return Step::Continue;
        }

        let at = self.cursor.position();
        match c {
            ']' => {
                self.cursor.bump();
                if key.bracketed {
                    key.closed_at = Some(at);
                    self.key = Some(key);
                }
                Step::Continue
            }
            '@' => {
                self.cursor.bump();
                let end = match key.closed_at {
                    Some(end) => {
                        self.spec.flags.insert(FormatFlags::ENTITY_MARKER);
                        end
                    }
                    None => at,
                };
                self.spec.flags.insert(FormatFlags::EXTERNAL);
                if end > key.start {
                    self.spec.config_key = Some(self.cursor.text[key.start..end].to_string());
                }
                self.conclude(ArgType::Object, Some(Size::POINTER))
            }
            _ => {
                // Not a key after all, `c` is handled by the regular grammar
                self.key = None;
                Step::Continue
            }
        }
    }

    fn grammar_char(&mut self, c: char) -> Result<Step> {
        let offset = self.cursor.position();
        self.cursor.bump();

        let flags = &mut self.spec.flags;
        match c {
            '#' => self.seen_sharp = true,
            '[' => {
                if !self.seen_open_bracket {
                    self.seen_open_bracket = true;
                    self.key = Some(KeyRun::bracketed(self.cursor.position()));
                }
            }
            ' ' => {
                if !flags.contains(FormatFlags::FORCE_SIGN) {
                    flags.insert(FormatFlags::SPACE_SIGN);
                }
            }
            '-' => {
                flags.insert(FormatFlags::LEFT_JUSTIFY);
                flags.remove(FormatFlags::ZERO_PAD);
            }
            '+' => {
                flags.insert(FormatFlags::FORCE_SIGN);
                flags.remove(FormatFlags::SPACE_SIGN);
            }
            '0' => {
                // after a '.' this is an explicit precision of 0, not zero padding
                if self.seen_dot {
                    self.precision.value = Some(0);
                } else if !flags.contains(FormatFlags::LEFT_JUSTIFY) {
                    flags.insert(FormatFlags::ZERO_PAD);
                }
            }
            'h' => {
                self.spec.size = if self.cursor.eat('h') {
                    Size::Size1
                } else {
                    Size::Size2
                }
            }
            'l' => {
                self.spec.size = if self.cursor.eat('l') {
                    Size::Size8
                } else {
                    Size::LONG
                }
            }
            'L' => self.spec.size = Size::Size16,
            'q' | 'j' => self.spec.size = Size::Size8,
            't' | 'z' => self.spec.size = Size::LONG,
            'c' => return Ok(self.conclude(ArgType::Integer, Some(Size::Size1))),
            'd' | 'i' | 'D' | 'o' | 'O' | 'x' | 'X' => {
                return Ok(self.finish_integer(NumericStyle::Decimal))
            }
            'u' | 'U' => return Ok(self.finish_integer(NumericStyle::Unsigned)),
            'e' | 'E' | 'g' | 'G' => return Ok(self.finish_float(Some(NumericStyle::Scientific))),
            'f' | 'F' => return Ok(self.finish_float(Some(NumericStyle::Decimal))),
            'a' | 'A' => return Ok(self.finish_float(None)),
            // %n never writes back
            'n' => return Ok(self.conclude(ArgType::DisabledWriteBack, Some(Size::POINTER))),
            'p' => return Ok(self.conclude(ArgType::Pointer, Some(Size::POINTER))),
            's' => return Ok(self.conclude(ArgType::CString, Some(Size::POINTER))),
            'S' => return Ok(self.conclude(ArgType::WideString, Some(Size::POINTER))),
            'C' => return Ok(self.conclude(ArgType::WideChar, Some(Size::Size2))),
            'P' => return Ok(self.conclude(ArgType::PascalString, Some(Size::POINTER))),
            '@' => {
                if !self.seen_sharp {
                    return Ok(self.conclude(ArgType::Object, Some(Size::POINTER)));
                }
                self.seen_sharp = false;
                self.key = Some(KeyRun::entity(self.cursor.position()));
            }
            '1'..='9' => self.number(c, offset)?,
            '*' => self.width.index = ArgIndex::Awaiting,
            '.' => {
                self.seen_dot = true;
                if self.cursor.eat('*') {
                    self.precision.index = ArgIndex::Awaiting;
                }
            }
            _ => return Ok(self.conclude(ArgType::Literal, None)),
        }
        Ok(Step::Continue)
    }

    fn conclude(&mut self, arg_type: ArgType, size: Option<Size>) -> Step {
        self.spec.arg_type = arg_type;
        if let Some(size) = size {
            self.spec.size = size;
        }
        Step::Done
    }

    fn finish_integer(&mut self, style: NumericStyle) -> Step {
        self.spec.flags.insert(FormatFlags::LOCALIZABLE);
        self.spec.numeric_style = Some(style);
        self.conclude(ArgType::Integer, None)
    }

    fn finish_float(&mut self, style: Option<NumericStyle>) -> Step {
        self.spec.flags.insert(FormatFlags::LOCALIZABLE);
        self.spec.numeric_style = style;

        // a '.' with nothing after it, not even '*'
        if self.seen_dot && self.precision.is_unset() {
            self.precision.value = Some(0);
        }

        let size = match self.spec.size {
            Size::Size16 => Size::Size16,
            _ => Size::Size8,
        };
        self.conclude(ArgType::Float, Some(size))
    }

    /// Digit run starting with `first`, either `N$` or a width/precision value.
    fn number(&mut self, first: char, offset: usize) -> Result<()> {
        let mut number: i64 = 0;
        let mut digit = first;
        loop {
            number = number
                .checked_mul(10)
                .and_then(|n| n.checked_add(i64::from(digit as u8 - b'0')))
                .ok_or(Error::Overflow { offset })?;

            match self.cursor.peek() {
                Some(next) if next.is_ascii_digit() => {
                    self.cursor.bump();
                    digit = next;
                }
                _ => break,
            }
        }

        if self.cursor.eat('$') {
            if number > i64::from(i8::MAX) {
                return Err(Error::Overflow { offset });
            }
            // positions start from 1
            let index = (number - 1) as u8;
            if self.precision.index == ArgIndex::Awaiting {
                self.precision.index = ArgIndex::Resolved(index);
            } else if self.width.index == ArgIndex::Awaiting {
                self.width.index = ArgIndex::Resolved(index);
            } else {
                self.spec.main_arg_num = Some(index);
            }
            return Ok(());
        }

        if number > i64::from(i32::MAX) {
            return Err(Error::Overflow { offset });
        }
        if self.seen_dot {
            self.precision.value = Some(number as u32);
        } else {
            self.width.value = Some(number as u32);
        }
        Ok(())
    }
}

/// Parse the specifier starting at `cursor` and move `cursor` past it.
///
/// The returned [`Spec`] has its `location` and `length` set. A [`ArgType::Literal`] result
/// means the text was not a conversion (such as `%%`).
///
/// # Panics
///
/// If `format[*cursor]` is not a `%`.
pub fn parse_spec(format: &str, cursor: &mut usize) -> Result<Spec> {
    assert!(
        format.get(*cursor..).is_some_and(|rest| rest.starts_with('%')),
        "format[cursor] must be a '%'"
    );

    let mut parser = SpecParser::new(format, *cursor);
    parser.cursor.bump();
    if parser.cursor.peek().is_none() {
        return Err(Error::Malformed { offset: *cursor });
    }

    let (spec, end) = parser.run()?;
    *cursor = end;
    Ok(spec)
}
