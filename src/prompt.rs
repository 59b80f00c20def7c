//! 프롬프트 구성
//!
//! 작업 종류별 시스템 지시문 묶음과 사용자 프롬프트를 조립한다. 순수
//! 함수이며 I/O 가 없다. 시스템 지시문은 논리적으로 하나의 지시지만
//! 절(페르소나, 출력 형식, 분류 기준, 강제 규칙) 단위로 나눠 들고 있고,
//! 순서가 의미를 가진다. 절을 하나로 합치는 일은 전송 계층의 몫이다.

use phf::phf_map;

/// 분류 불가·실패 시 쓰는 기타 라벨
pub const FALLBACK_TOPIC_LABEL: &str = "6. 기타";

/// 연구주제 분류 라벨 (번호 → 라벨)
pub static TOPIC_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "1" => "1. 동물대체시험기술 개발",
    "2" => "2. 생활환경화학물질 독성연구",
    "3" => "3. 신약 등에 대한 동물실험 관련",
    "4" => "4. 환경 및 생태독성 관련 연구",
    "5" => "5. 분석기술 관련 연구",
    "6" => FALLBACK_TOPIC_LABEL,
};

/// LLM 에 보낼 지시문 한 벌
#[derive(Debug, Clone)]
pub struct PromptSpec {
    /// 시스템 지시문 절 목록 (순서 의미 있음)
    pub system: Vec<String>,
    /// 사용자 프롬프트
    pub user: String,
}

/// 뉴스 요약 프롬프트
pub fn summarize(body: &str, max_len: usize) -> PromptSpec {
    PromptSpec {
        system: vec![
            "당신은 한국어 뉴스를 요약하는 보조자입니다.".to_string(),
            format!("요약은 {}자 이내로 핵심 내용만 정리하세요.", max_len),
            "숫자, 기관명, 날짜는 가능한 그대로 보존하세요.".to_string(),
        ],
        user: format!(
            "다음은 한국어 뉴스 기사 본문입니다. 핵심 내용을 요약해 주세요.\n\n{}",
            body
        ),
    }
}

/// 논문 연구주제 분류 프롬프트
///
/// 시스템 지시문에 6개 라벨 전체를 정의와 함께 나열하고, 숫자 하나만
/// 출력하도록 강제한다. 애매하면 6번(기타)을 고르게 하는 규칙이 모호한
/// 입력에 대한 유일한 정의된 동작이다.
pub fn classify(title: &str, abstract_text: &str, project_title: &str) -> PromptSpec {
    let system = vec![
        "당신은 독성학 및 독성관련 연구 논문을 분류하는 전문가입니다.".to_string(),
        "사용자가 제공하는 논문 정보를 보고 아래 6개 연구주제 중 가장 적합한 하나를 선택하세요.".to_string(),
        "연구주제는 다음과 같습니다.".to_string(),
        "1. 동물대체시험기술 개발: in vitro, in silico, 오가노이드, 오가노온어칩, 3D 세포배양, 동물대체시험, NAMs 등 동물 대신/축소를 목표로 한 시험법·모델·플랫폼 개발 연구".to_string(),
        "2. 생활환경화학물질 독성연구: 생활용품, 식품·포장재, 미세플라스틱, 중금속, 산업화학물질 등 사람이 일상생활에서 노출되는 화학물질의 인체독성·건강영향을 다루는 연구".to_string(),
        "3. 신약 등에 대한 동물실험 관련: 신약·제제·바이오의약품·백신·치료제 등에 대한 효능·안전성·약동/약력학 평가를 위해 동물모델을 사용하는 전임상·독성시험 연구".to_string(),
        "4. 환경 및 생태독성 관련 연구: 수생생물, 토양생물, 야생생물, 생태계 수준의 독성, 환경노출, 생태영향(예: 물벼룩·어류·토양무척추동물 독성, 생태위해성 평가 등)을 다루는 연구".to_string(),
        "5. 분석기술 관련 연구: 화학물질, 대사체, 바이오마커 등을 정량/정성 분석하기 위한 분석법·기기·센서·전처리기술 개발 및 성능평가 연구(LC-MS/MS, GC-MS, 센서, 이미징 등)".to_string(),
        "6. 기타: 위 1~5 어느 쪽에도 뚜렷이 속하지 않는 경우".to_string(),
        "항상 다음 지침을 지키세요:".to_string(),
        "- 가장 적합한 하나의 번호만 선택합니다. 복수 선택 금지.".to_string(),
        "- 애매하면 가장 근접한 번호 하나를 고르고, 정말 애매하면 6번 기타를 선택합니다.".to_string(),
        "- 최종 답변은 반드시 숫자 1~6 중 하나만 출력합니다. 그 외 설명/문장은 절대 쓰지 마세요.".to_string(),
    ];

    // 제목/초록/과제명 중 있는 것만 넣어 맥락을 확보한다
    let mut parts = Vec::new();
    if !title.is_empty() {
        parts.push(format!("[논문 제목]\n{}", title));
    }
    if !abstract_text.is_empty() {
        parts.push(format!("[초록]\n{}", abstract_text));
    }
    if !project_title.is_empty() {
        parts.push(format!("[관련 과제명(국문)]\n{}", project_title));
    }
    let content = parts.join("\n\n");

    let user = format!(
        "아래 논문의 내용을 바탕으로, 미리 정의된 6개 연구주제 중 가장 잘 맞는 하나를 선택하세요.\n\
         출력 형식은 숫자 하나(1,2,3,4,5,6)만 사용하세요.\n\n\
         {}\n\n\
         이 논문에 가장 적합한 연구주제 번호는 무엇입니까? 숫자만 답변하세요.",
        content
    );

    PromptSpec { system, user }
}

/// 회의 안건 구조화 프롬프트
///
/// JSON 배열 하나만 출력하도록 강제한다. 그래도 모델이 설명을 덧붙이는
/// 경우가 있어 해석 쪽에 복구 경로가 따로 있다.
pub fn agenda(text: &str, filename: &str) -> PromptSpec {
    let system = vec![
        "당신은 정부·공공기관 회의 안건 문서를 구조화하는 보조자입니다.".to_string(),
        "항상 JSON 배열만 출력해야 합니다.".to_string(),
        "JSON 배열의 각 요소는 하나의 안건이며, 키는 date, location, directors, type, number, title, result 일곱 개만 사용합니다.".to_string(),
        "마크다운 코드 블록(``` 등)이나 기타 설명 문장은 절대 출력하지 마세요.".to_string(),
    ];

    let user = format!(
        r#"다음 텍스트는 회의 안건 PDF에서 추출한 전체 내용입니다.
파일명: {filename}

---BEGIN---
{text}
---END---

이 텍스트에서 '안건'별로 다음 정보를 추출하여 JSON 배열로 만드세요.

필드 규칙:
- "date": 해당 안건이 속한 날짜를 "YYYY-MM-DD" 형식으로 적습니다.
          명확하지 않으면 문서에 나타난 날짜 형식(예: "2025. 11. 24.")을 그대로 사용해도 됩니다.
          전혀 추론이 안 되면 null을 넣습니다.
- "location": 회의 장소
- "directors" : 회의 참석이사들을 열거해서 적습니다. 대참한 경우에는 대참자 이름을 적습니다.
- "type": 안건 구분으로, 반드시 "보고안건" 또는 "의결안건" 둘 중 하나로만 작성합니다.
- "number" : 안건의 번호로 몇호 안건인지 적습니다.
- "title": 안건 제목을 간략하게 적습니다.
- "result": 안건의 결과를 1~2문장 개조식으로 요약해서 적습니다. "원안접수", "원안의결", "수정의결" 등
            안건 처리 결과가 반드시 포함되어야 합니다.

출력 형식 예시 (형식만 참고, 실제 내용은 텍스트 기준으로 작성):

[
  {{
    "date": "2025-11-24",
    "location" : "세종국책연구단지 연구지원동 1층 대회의실1",
    "directors" : "김영식, 이은영, 김재현, 민병주...",
    "type": "보고안건",
    "number": "1호",
    "title": "2024년도 소관연구기관 감사결과 보고",
    "result": "감사위원회가 직접 감사 총 9회 실시, 기타 복무감사 21개 기관 52회 실시 등 (별도의견 없이 원안접수)"
  }}
]

위와 같은 JSON 배열 하나만 출력하고, 그 밖의 텍스트는 절대로 포함하지 마세요."#
    );

    PromptSpec { system, user }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_system_enumerates_all_labels() {
        let spec = classify("제목", "초록", "과제명");
        let joined = spec.system.join(" ");
        for label in TOPIC_MAP.values() {
            assert!(joined.contains(label), "라벨 누락: {}", label);
        }
        assert!(joined.contains("숫자 1~6 중 하나만"));
    }

    #[test]
    fn classify_user_prompt_skips_empty_fields() {
        let spec = classify("독성 평가 연구", "", "");
        assert!(spec.user.contains("[논문 제목]"));
        assert!(!spec.user.contains("[초록]"));
        assert!(!spec.user.contains("[관련 과제명(국문)]"));
    }

    #[test]
    fn summarize_embeds_length_limit_and_body() {
        let spec = summarize("기사 본문", 150);
        assert!(spec.system.iter().any(|s| s.contains("150자 이내")));
        assert!(spec.user.contains("기사 본문"));
    }

    #[test]
    fn agenda_prompt_names_all_seven_keys() {
        let spec = agenda("회의 내용", "제3차 이사회.pdf");
        assert!(spec.user.contains("제3차 이사회.pdf"));
        for key in ["date", "location", "directors", "type", "number", "title", "result"] {
            assert!(spec.user.contains(key), "키 누락: {}", key);
        }
    }

    #[test]
    fn fallback_label_is_in_the_closed_set() {
        assert_eq!(TOPIC_MAP.get("6").copied(), Some(FALLBACK_TOPIC_LABEL));
    }
}
