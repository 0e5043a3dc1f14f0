//! 디버그 로그 모듈
//!
//! 탐색/병합 중의 포함·제외 판단을 기록하는 주입형 로그 수신자입니다.
//! 전역 상태 없이 walker와 concatenator에 직접 넘겨 사용합니다.

/// 진단 텍스트 한 줄을 기록하는 수신자
pub trait DebugSink {
    /// 진단 메시지 한 줄 기록
    fn record(&self, line: &str);
}

/// 아무것도 기록하지 않는 수신자 (디버그 비활성화)
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl DebugSink for NoopSink {
    fn record(&self, _line: &str) {}
}

/// `log` 파사드의 debug 레벨로 전달하는 수신자
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DebugSink for LogSink {
    fn record(&self, line: &str) {
        log::debug!(target: "cora", "{}", line);
    }
}

impl<F> DebugSink for F
where
    F: Fn(&str),
{
    fn record(&self, line: &str) {
        self(line)
    }
}

/// 디버그 플래그에 맞는 수신자 선택
pub fn sink_for(debug: bool) -> &'static dyn DebugSink {
    static NOOP: NoopSink = NoopSink;
    static LOG: LogSink = LogSink;

    if debug {
        &LOG
    } else {
        &NOOP
    }
}
