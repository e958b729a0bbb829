//! The crossword token alphabet.
//!
//! Czech crossword answers are spelled with the 26 Latin letters, the *ch*
//! digraph (one cell per Czech orthography), and accented letters. Every
//! alphabet member carries a textual mnemonic: a single base letter, or a
//! base letter followed by a diacritic-class letter (`L` for čárka, `D` for
//! háček, `R` for kroužek). Raw candidate text from the answer dictionary is
//! plain, non-accented text, so [`tokenize`] matches characters against the
//! leading character of each mnemonic.
//!
//! # Examples
//!
//! ```
//! use krizovka_core::{Letter, tokenize};
//!
//! assert_eq!(
//!     tokenize("chata"),
//!     vec![Letter::Ch, Letter::A, Letter::T, Letter::A],
//! );
//! ```

use std::fmt::{self, Display};

/// Error returned when text does not name a member of the alphabet.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unrecognized token mnemonic: {mnemonic:?}")]
pub struct InvalidToken {
    /// The rejected mnemonic text.
    pub mnemonic: String,
}

/// One member of the closed crossword letter alphabet.
///
/// The accented variants are named after their mnemonics: `Al` is Á (A +
/// čárka), `Sd` is Š (S + háček), `Ur` is Ů (U + kroužek).
///
/// # Examples
///
/// ```
/// use krizovka_core::Letter;
///
/// assert_eq!(Letter::Ch.mnemonic(), "CH");
/// assert_eq!(Letter::from_mnemonic("sd")?, Letter::Sd);
/// assert_eq!(Letter::Sd.to_string(), "Š");
/// # Ok::<(), krizovka_core::InvalidToken>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    /// The Czech *ch* digraph, a single crossword cell.
    Ch,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    /// Á
    Al,
    /// Č
    Cd,
    /// Ď
    Dd,
    /// É
    El,
    /// Ě
    Ed,
    /// Í
    Il,
    /// Ň
    Nd,
    /// Ó
    Ol,
    /// Ř
    Rd,
    /// Š
    Sd,
    /// Ť
    Td,
    /// Ú
    Ul,
    /// Ů
    Ur,
    /// Ý
    Yl,
    /// Ž
    Zd,
}

impl Letter {
    /// All alphabet members in definition order.
    ///
    /// The order is observable: [`tokenize`] emits the first member whose
    /// mnemonic's leading character matches the input character, so the
    /// plain letters shadow the accented ones that share a base letter.
    pub const ALL: [Self; 42] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::Ch,
        Self::I,
        Self::J,
        Self::K,
        Self::L,
        Self::M,
        Self::N,
        Self::O,
        Self::P,
        Self::Q,
        Self::R,
        Self::S,
        Self::T,
        Self::U,
        Self::V,
        Self::W,
        Self::X,
        Self::Y,
        Self::Z,
        Self::Al,
        Self::Cd,
        Self::Dd,
        Self::El,
        Self::Ed,
        Self::Il,
        Self::Nd,
        Self::Ol,
        Self::Rd,
        Self::Sd,
        Self::Td,
        Self::Ul,
        Self::Ur,
        Self::Yl,
        Self::Zd,
    ];

    /// Returns the textual mnemonic of this letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use krizovka_core::Letter;
    ///
    /// assert_eq!(Letter::A.mnemonic(), "A");
    /// assert_eq!(Letter::Ch.mnemonic(), "CH");
    /// assert_eq!(Letter::Ur.mnemonic(), "UR");
    /// ```
    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
            Self::G => "G",
            Self::H => "H",
            Self::Ch => "CH",
            Self::I => "I",
            Self::J => "J",
            Self::K => "K",
            Self::L => "L",
            Self::M => "M",
            Self::N => "N",
            Self::O => "O",
            Self::P => "P",
            Self::Q => "Q",
            Self::R => "R",
            Self::S => "S",
            Self::T => "T",
            Self::U => "U",
            Self::V => "V",
            Self::W => "W",
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
            Self::Al => "AL",
            Self::Cd => "CD",
            Self::Dd => "DD",
            Self::El => "EL",
            Self::Ed => "ED",
            Self::Il => "IL",
            Self::Nd => "ND",
            Self::Ol => "OL",
            Self::Rd => "RD",
            Self::Sd => "SD",
            Self::Td => "TD",
            Self::Ul => "UL",
            Self::Ur => "UR",
            Self::Yl => "YL",
            Self::Zd => "ZD",
        }
    }

    /// Returns the glyph this letter renders as in a filled grid.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Ch => "CH",
            Self::Al => "Á",
            Self::Cd => "Č",
            Self::Dd => "Ď",
            Self::El => "É",
            Self::Ed => "Ě",
            Self::Il => "Í",
            Self::Nd => "Ň",
            Self::Ol => "Ó",
            Self::Rd => "Ř",
            Self::Sd => "Š",
            Self::Td => "Ť",
            Self::Ul => "Ú",
            Self::Ur => "Ů",
            Self::Yl => "Ý",
            Self::Zd => "Ž",
            plain => plain.mnemonic(),
        }
    }

    /// Creates a letter from its mnemonic, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidToken`] if the text is not a mnemonic of any
    /// alphabet member.
    ///
    /// # Examples
    ///
    /// ```
    /// use krizovka_core::Letter;
    ///
    /// assert_eq!(Letter::from_mnemonic("ch")?, Letter::Ch);
    /// assert!(Letter::from_mnemonic("É").is_err());
    /// # Ok::<(), krizovka_core::InvalidToken>(())
    /// ```
    pub fn from_mnemonic(text: &str) -> Result<Self, InvalidToken> {
        let upper = text.to_uppercase();
        Self::ALL
            .into_iter()
            .find(|letter| letter.mnemonic() == upper)
            .ok_or_else(|| InvalidToken {
                mnemonic: text.to_owned(),
            })
    }

    fn leading_char(self) -> char {
        // Mnemonics are non-empty ASCII by construction.
        self.mnemonic().as_bytes()[0] as char
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so grid rendering can use width specifiers
        f.pad(self.glyph())
    }
}

/// The content of one grid cell.
///
/// `Blocked` cells sit outside every clue and are fixed at grid creation.
/// `Blank` cells belong to a clue but hold no letter yet. Letter cells are
/// filled monotonically: once written, a cell is only ever rewritten with
/// the same letter (see [`Token::fits`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Outside any clue, never mutated after grid construction.
    Blocked,
    /// Inside a clue, not yet assigned a letter.
    Blank,
    /// A concrete alphabet letter.
    Letter(Letter),
}

impl Token {
    /// Returns `true` if this cell may be overwritten with `candidate`.
    ///
    /// This is the single gate checked before any write into a cell, and it
    /// is what makes fills monotonic: a blocked cell accepts nothing, a
    /// blank cell accepts anything, and a filled cell accepts only the
    /// letter it already holds.
    ///
    /// # Examples
    ///
    /// ```
    /// use krizovka_core::{Letter, Token};
    ///
    /// assert!(Token::Blank.fits(Letter::A));
    /// assert!(Token::Letter(Letter::A).fits(Letter::A));
    /// assert!(!Token::Letter(Letter::A).fits(Letter::B));
    /// assert!(!Token::Blocked.fits(Letter::A));
    /// ```
    #[must_use]
    pub const fn fits(self, candidate: Letter) -> bool {
        match self {
            Self::Blocked => false,
            Self::Blank => true,
            Self::Letter(held) => held as u8 == candidate as u8,
        }
    }

    /// Returns `true` if this is the `Blank` sentinel.
    #[must_use]
    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Blank)
    }

    /// Returns `true` if this is the `Blocked` sentinel.
    #[must_use]
    pub const fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }

    /// Returns the held letter, if any.
    #[must_use]
    pub const fn letter(self) -> Option<Letter> {
        match self {
            Self::Letter(letter) => Some(letter),
            Self::Blocked | Self::Blank => None,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blocked => f.pad("."),
            Self::Blank => f.pad(" "),
            Self::Letter(letter) => Display::fmt(letter, f),
        }
    }
}

/// Splits raw answer text into a sequence of alphabet letters.
///
/// The input is uppercased, then scanned left to right with a one-character
/// lookahead for the *ch* digraph: a `C` is deferred, becomes [`Letter::Ch`]
/// if an `H` follows, and is emitted as a plain `C` otherwise (including at
/// end of input). Every other character is matched against the leading
/// character of each mnemonic in [`Letter::ALL`] order, first match wins.
///
/// Characters matching no mnemonic are silently skipped, so the result can
/// be shorter than the character count for malformed input. Callers that
/// care about exact lengths must compare against the token count, not the
/// character count.
///
/// # Examples
///
/// ```
/// use krizovka_core::{Letter, tokenize};
///
/// assert_eq!(
///     tokenize("CHATA"),
///     vec![Letter::Ch, Letter::A, Letter::T, Letter::A],
/// );
/// assert_eq!(tokenize("a-c"), vec![Letter::A, Letter::C]);
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<Letter> {
    let mut letters = Vec::new();
    let mut pending_c = false;

    for ch in text.to_uppercase().chars() {
        if pending_c {
            pending_c = false;
            if ch == 'H' {
                letters.push(Letter::Ch);
                continue;
            }
            letters.push(Letter::C);
        }

        if ch == 'C' {
            pending_c = true;
            continue;
        }

        if let Some(letter) = Letter::ALL
            .into_iter()
            .find(|letter| letter.leading_char() == ch)
        {
            letters.push(letter);
        }
    }

    if pending_c {
        letters.push(Letter::C);
    }

    letters
}
