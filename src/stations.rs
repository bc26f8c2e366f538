/// Station registry for the AirKorea particulate analysis service.
///
/// Defines the canonical region → monitoring-station map used by the
/// presentation layer's pickers. This is the single source of truth for
/// station names — all other modules should reference stations from here
/// rather than hardcoding them.
///
/// Station names are the upstream API's `stationName` keys and are passed
/// to it verbatim, so they stay in Korean. Region names are display labels.

// ---------------------------------------------------------------------------
// Region metadata
// ---------------------------------------------------------------------------

/// One administrative region and the monitoring stations within it.
pub struct Region {
    /// Display label for the region (province or metropolitan city).
    pub name: &'static str,
    /// Korean short name, as shown by the upstream portal.
    pub korean_name: &'static str,
    /// Monitoring stations in this region, in the portal's listing order.
    pub stations: &'static [&'static str],
}

/// Region shown first when no selection has been made.
pub const DEFAULT_REGION: &str = "Seoul";

/// Station used when no selection has been made (first Seoul station).
pub const DEFAULT_STATION: &str = "강남구";

/// All regions with their monitoring stations.
///
/// Source: station lists published by the Korea Environment Corporation
/// (AirKorea) real-time measurement portal.
pub static REGION_REGISTRY: &[Region] = &[
    Region {
        name: "Seoul",
        korean_name: "서울",
        stations: &[
            "강남구", "강동구", "강북구", "강서구", "관악구", "광진구", "구로구",
            "금천구", "노원구", "도봉구", "동대문구", "동작구", "마포구", "서대문구",
            "서초구", "성동구", "성북구", "송파구", "양천구", "영등포구", "용산구",
            "은평구", "종로구", "중구", "중랑구",
        ],
    },
    Region {
        name: "Busan",
        korean_name: "부산",
        stations: &[
            "대연동", "명장동", "학장동", "덕천동", "전포동", "광복동", "용호동",
            "장림동", "신평동", "해운대", "기장읍", "정관읍",
        ],
    },
    Region {
        name: "Daegu",
        korean_name: "대구",
        stations: &["봉산동", "이현동", "지산동", "성서", "대명동", "복현동", "만촌동", "안심"],
    },
    Region {
        name: "Incheon",
        korean_name: "인천",
        stations: &["주안", "구월동", "송도", "연희동", "운서동", "신흥동", "석남동"],
    },
    Region {
        name: "Gwangju",
        korean_name: "광주",
        stations: &["운암동", "광산구", "북구", "동구", "서구"],
    },
    Region {
        name: "Daejeon",
        korean_name: "대전",
        stations: &["가양동", "문평동", "노은동", "오룡동", "대흥동"],
    },
    Region {
        name: "Ulsan",
        korean_name: "울산",
        stations: &["달동", "삼산동", "명촌동", "농소", "화암동"],
    },
    Region {
        name: "Sejong",
        korean_name: "세종",
        stations: &["신흥동", "보람동"],
    },
    Region {
        name: "Gyeonggi",
        korean_name: "경기",
        stations: &[
            "수원", "성남", "안양", "안산", "용인", "평택", "고양", "남양주", "의정부",
            "광명", "화성", "파주", "시흥", "김포", "군포", "하남", "오산", "이천", "안성",
        ],
    },
    Region {
        name: "Gangwon",
        korean_name: "강원",
        stations: &["춘천", "원주", "강릉", "동해", "속초", "삼척", "철원", "횡성", "홍천"],
    },
    Region {
        name: "Chungbuk",
        korean_name: "충북",
        stations: &["청주", "충주", "제천", "단양", "옥천", "증평", "진천"],
    },
    Region {
        name: "Chungnam",
        korean_name: "충남",
        stations: &["천안", "공주", "보령", "아산", "서산", "논산", "당진", "계룡", "예산"],
    },
    Region {
        name: "Jeonbuk",
        korean_name: "전북",
        stations: &["전주", "군산", "익산", "정읍", "남원", "김제", "완주"],
    },
    Region {
        name: "Jeonnam",
        korean_name: "전남",
        stations: &["목포", "여수", "순천", "나주", "광양", "무안", "구례", "화순"],
    },
    Region {
        name: "Gyeongbuk",
        korean_name: "경북",
        stations: &["포항", "경주", "김천", "안동", "구미", "영주", "영천", "상주"],
    },
    Region {
        name: "Gyeongnam",
        korean_name: "경남",
        stations: &["창원", "진주", "통영", "사천", "김해", "밀양", "거제", "양산"],
    },
    Region {
        name: "Jeju",
        korean_name: "제주",
        stations: &["제주시", "서귀포"],
    },
];

/// Returns every station name in the registry, across all regions.
pub fn all_station_names() -> Vec<&'static str> {
    REGION_REGISTRY
        .iter()
        .flat_map(|r| r.stations.iter().copied())
        .collect()
}

/// Looks up a region by display name. Returns `None` if not found.
pub fn find_region(name: &str) -> Option<&'static Region> {
    REGION_REGISTRY.iter().find(|r| r.name == name)
}

/// Finds the region a station belongs to, if the station is registered.
///
/// Station names are not globally unique (e.g. "신흥동" appears in both
/// Incheon and Sejong); the first region in registry order wins, matching
/// the portal's own listing.
pub fn region_of_station(station: &str) -> Option<&'static Region> {
    REGION_REGISTRY
        .iter()
        .find(|r| r.stations.contains(&station))
}

/// Checks whether a station name is present anywhere in the registry.
///
/// Callers may still query unregistered stations (the registry backs the
/// pickers, it does not gate the API) but can use this to warn first.
pub fn is_registered_station(station: &str) -> bool {
    region_of_station(station).is_some()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
