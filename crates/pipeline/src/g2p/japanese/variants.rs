//! Pronunciation variants applied before phonemization

/// Voiced counterpart of a katakana, if it has one
pub fn voiced(c: char) -> Option<char> {
    let v = match c {
        'カ' => 'ガ',
        'キ' => 'ギ',
        'ク' => 'グ',
        'ケ' => 'ゲ',
        'コ' => 'ゴ',
        'サ' => 'ザ',
        'シ' => 'ジ',
        'ス' => 'ズ',
        'セ' => 'ゼ',
        'ソ' => 'ゾ',
        'タ' => 'ダ',
        'チ' => 'ヂ',
        'ツ' => 'ヅ',
        'テ' => 'デ',
        'ト' => 'ド',
        'ハ' => 'バ',
        'ヒ' => 'ビ',
        'フ' => 'ブ',
        'ヘ' => 'ベ',
        'ホ' => 'ボ',
        'ウ' => 'ヴ',
        _ => return None,
    };
    Some(v)
}

/// Unvoiced counterpart of a voiced katakana
pub fn unvoiced(c: char) -> Option<char> {
    let v = match c {
        'ガ' => 'カ',
        'ギ' => 'キ',
        'グ' => 'ク',
        'ゲ' => 'ケ',
        'ゴ' => 'コ',
        'ザ' => 'サ',
        'ジ' => 'シ',
        'ズ' => 'ス',
        'ゼ' => 'セ',
        'ゾ' => 'ソ',
        'ダ' => 'タ',
        'ヂ' => 'チ',
        'ヅ' => 'ツ',
        'デ' => 'テ',
        'ド' => 'ト',
        'バ' | 'パ' => 'ハ',
        'ビ' | 'ピ' => 'ヒ',
        'ブ' | 'プ' => 'フ',
        'ベ' | 'ペ' => 'ヘ',
        'ボ' | 'ポ' => 'ホ',
        'ヴ' => 'ウ',
        _ => return None,
    };
    Some(v)
}

/// Voice every voiceable mora (濁点)
pub fn apply_dakuten(pron: &str) -> String {
    pron.chars().map(|c| voiced(c).unwrap_or(c)).collect()
}

/// Child-speech substitutions: サ行 and ザ行 become palatal affricates
pub fn apply_babytalk(pron: &str) -> String {
    let mut out = String::with_capacity(pron.len());
    for c in pron.chars() {
        match c {
            'サ' => out.push_str("チャ"),
            'シ' => out.push('チ'),
            'ス' => out.push_str("チュ"),
            'セ' => out.push_str("チェ"),
            'ソ' => out.push_str("チョ"),
            'ザ' => out.push_str("ジャ"),
            'ズ' => out.push_str("ジュ"),
            'ゼ' => out.push_str("ジェ"),
            'ゾ' => out.push_str("ジョ"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dakuten() {
        assert_eq!(apply_dakuten("サクラ"), "ザグラ");
        assert_eq!(apply_dakuten("アイ"), "アイ");
    }

    #[test]
    fn test_babytalk() {
        assert_eq!(apply_babytalk("オサカナ"), "オチャカナ");
        assert_eq!(apply_babytalk("スシ"), "チュチ");
    }

    #[test]
    fn test_voicing_tables() {
        assert_eq!(voiced('ス'), Some('ズ'));
        assert_eq!(unvoiced('ズ'), Some('ス'));
        assert_eq!(unvoiced('パ'), Some('ハ'));
        assert_eq!(voiced('ン'), None);
    }
}
