// 이 줄보다 짧은 라인을 만나면 입력의 끝으로 간주 (개행 문자 포함, 문자 단위)
pub const MIN_LINE_CHARS: usize = 10;

// 할당 추적 로그의 마커들
pub const INFO_MARKER: &str = "INFO";
pub const STATUS_MARKER: &str = "Status";
pub const CONTEXT_MARKER: &str = "mace";

// Status 마커 뒤에서 건너뛰는 고정 오프셋
pub const STATUS_OFFSET: usize = 6;

// Status 필드 리스트에서 위치로 해석되는 인덱스
pub const ALLOC_FIELD_INDEX: usize = 1;
pub const FREE_FIELD_INDEX: usize = 3;

pub const ALLOC_DUMP_FILE: &str = "alloc.txt";
pub const FREE_DUMP_FILE: &str = "free.txt";

// 입력 경로가 주어지지 않았을 때 사용하는 벤치마크 CSV
pub const DEFAULT_BENCH_CSV: &str = "x.csv";

// ratio 컬럼이 없을 때 mixed 모드의 쓰기 비율 (%)
pub const DEFAULT_MIXED_WRITE_RATIO: u8 = 30;
