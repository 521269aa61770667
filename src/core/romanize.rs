/// Fixed-table romanization of Korean names.
///
/// Unknown characters pass through unchanged, so `romanize` is total.

/// Romanized form of a family name, if the table knows it.
pub fn surname_romanization(surname: &str) -> Option<&'static str> {
    let roman = match surname {
        "송" => "Song",
        "이" => "Lee",
        "김" => "Kim",
        "박" => "Park",
        "최" => "Choi",
        "정" => "Jung",
        "한" => "Han",
        "서" => "Seo",
        "강" => "Kang",
        "조" => "Cho",
        "윤" => "Yoon",
        "장" => "Jang",
        "임" => "Lim",
        "홍" => "Hong",
        "신" => "Shin",
        "원" => "Won",
        "백" => "Baek",
        "문" => "Moon",
        "민" => "Min",
        "양" => "Yang",
        "유" => "Yoo",
        "남" => "Nam",
        "노" => "Noh",
        "고" => "Ko",
        "구" => "Koo",
        "류" => "Ryu",
        "라" => "Ra",
        "안" => "Ahn",
        "오" => "Oh",
        "태" => "Tae",
        "도" => "Do",
        "천" => "Cheon",
        "배" => "Bae",
        "변" => "Byun",
        "황" => "Hwang",
        "전" => "Jeon",
        _ => return None,
    };
    Some(roman)
}

/// Romanized form of a single given-name syllable, if the table knows it.
pub fn given_romanization(syllable: char) -> Option<&'static str> {
    let roman = match syllable {
        '월' => "Wil",
        '선' => "Seon",
        '명' => "Myung",
        '영' => "Young",
        '지' => "Ji",
        '현' => "Hyun",
        '용' => "Yong",
        '준' => "Jun",
        '윤' => "Yoon",
        '하' => "Ha",
        '유' => "Yu",
        '연' => "Yeon",
        '우' => "Woo",
        '은' => "Eun",
        '민' => "Min",
        '정' => "Jung",
        '성' => "Sung",
        '원' => "Won",
        '석' => "Seok",
        '서' => "Seo",
        '휘' => "Hwi",
        '혁' => "Hyuk",
        '채' => "Chae",
        '소' => "So",
        '예' => "Ye",
        '규' => "Kyu",
        '도' => "Do",
        '경' => "Kyung",
        '강' => "Kang",
        '건' => "Gun",
        '호' => "Ho",
        '림' => "Rim",
        '해' => "Hae",
        '솔' => "Sol",
        _ => return None,
    };
    Some(roman)
}

pub fn knows_surname(surname: &str) -> bool {
    surname_romanization(surname).is_some()
}

pub fn knows_given_syllable(syllable: char) -> bool {
    given_romanization(syllable).is_some()
}

/// Romanize a localized name as `"{Surname} {Given-Parts}"`.
///
/// Each given-name character is looked up independently and the parts
/// are joined with hyphens.
pub fn romanize(surname: &str, given: &str) -> String {
    let surname_roman = surname_romanization(surname).unwrap_or(surname);
    let given_parts: Vec<String> = given
        .chars()
        .map(|c| match given_romanization(c) {
            Some(roman) => roman.to_string(),
            None => c.to_string(),
        })
        .collect();
    format!("{} {}", surname_roman, given_parts.join("-"))
}
