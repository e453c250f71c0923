//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 시 적용된 설정을 요약하는 배너 출력 함수들입니다.
//! 로그와 달리 `RUST_LOG` 설정과 무관하게 항상 표준 출력에 찍힙니다.

/// 박스 내부 폭 (문자 수)
const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                SIGNCASE BACKEND                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    for line in boxed_title(title) {
        println!("{}", line);
    }
}

fn boxed_title(title: &str) -> [String; 3] {
    let border = "═".repeat(BOX_WIDTH);
    [
        format!("╔{}╗", border),
        format!("║{:^width$}║", title, width = BOX_WIDTH),
        format!("╚{}╝", border),
    ]
}

/// 설정 항목 한 줄을 트리 형태로 출력합니다
///
/// ```text
///    ├─ Bind: 127.0.0.1:8080
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("{}", sub_task_line(name, status));
}

fn sub_task_line(name: &str, status: &str) -> String {
    format!("   ├─ {}: {}", name, status)
}
