/// The reserved words of JCR-SQL2, matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Keyword {
    Select,
    From,
    Where,
    Order,
    By,
    As,
    On,
    Join,
    Inner,
    Left,
    Right,
    Outer,
    And,
    Or,
    Not,
    Is,
    Null,
    Like,
    Cast,
    Contains,
    IsSameNode,
    IsChildNode,
    IsDescendantNode,
    Length,
    Name,
    LocalName,
    Score,
    Lower,
    Upper,
    Asc,
    Desc,
}

impl Keyword {
    pub(crate) fn from_token(token: &str) -> Option<Keyword> {
        let keyword = match token.to_ascii_uppercase().as_str() {
            "SELECT" => Keyword::Select,
            "FROM" => Keyword::From,
            "WHERE" => Keyword::Where,
            "ORDER" => Keyword::Order,
            "BY" => Keyword::By,
            "AS" => Keyword::As,
            "ON" => Keyword::On,
            "JOIN" => Keyword::Join,
            "INNER" => Keyword::Inner,
            "LEFT" => Keyword::Left,
            "RIGHT" => Keyword::Right,
            "OUTER" => Keyword::Outer,
            "AND" => Keyword::And,
            "OR" => Keyword::Or,
            "NOT" => Keyword::Not,
            "IS" => Keyword::Is,
            "NULL" => Keyword::Null,
            "LIKE" => Keyword::Like,
            "CAST" => Keyword::Cast,
            "CONTAINS" => Keyword::Contains,
            "ISSAMENODE" => Keyword::IsSameNode,
            "ISCHILDNODE" => Keyword::IsChildNode,
            "ISDESCENDANTNODE" => Keyword::IsDescendantNode,
            "LENGTH" => Keyword::Length,
            "NAME" => Keyword::Name,
            "LOCALNAME" => Keyword::LocalName,
            "SCORE" => Keyword::Score,
            "LOWER" => Keyword::Lower,
            "UPPER" => Keyword::Upper,
            "ASC" => Keyword::Asc,
            "DESC" => Keyword::Desc,
            _ => return None,
        };
        Some(keyword)
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Keyword::Select => "SELECT",
            Keyword::From => "FROM",
            Keyword::Where => "WHERE",
            Keyword::Order => "ORDER",
            Keyword::By => "BY",
            Keyword::As => "AS",
            Keyword::On => "ON",
            Keyword::Join => "JOIN",
            Keyword::Inner => "INNER",
            Keyword::Left => "LEFT",
            Keyword::Right => "RIGHT",
            Keyword::Outer => "OUTER",
            Keyword::And => "AND",
            Keyword::Or => "OR",
            Keyword::Not => "NOT",
            Keyword::Is => "IS",
            Keyword::Null => "NULL",
            Keyword::Like => "LIKE",
            Keyword::Cast => "CAST",
            Keyword::Contains => "CONTAINS",
            Keyword::IsSameNode => "ISSAMENODE",
            Keyword::IsChildNode => "ISCHILDNODE",
            Keyword::IsDescendantNode => "ISDESCENDANTNODE",
            Keyword::Length => "LENGTH",
            Keyword::Name => "NAME",
            Keyword::LocalName => "LOCALNAME",
            Keyword::Score => "SCORE",
            Keyword::Lower => "LOWER",
            Keyword::Upper => "UPPER",
            Keyword::Asc => "ASC",
            Keyword::Desc => "DESC",
        }
    }
}
