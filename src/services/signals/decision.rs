//! Rule-based buy/sell/hold decision.

use crate::types::SignalDirection;

const OVERBOUGHT: f64 = 70.0;
const OVERSOLD: f64 = 30.0;

const NEUTRAL_SCORE: u8 = 50;
const EXTREME_RSI_BONUS: u8 = 20;
const MAX_CONFIDENCE: u8 = 85;
const MAX_STRENGTH: u8 = 90;
const STRENGTH_MARGIN: u8 = 10;

/// Return volatility above which confidence is dampened.
pub const HIGH_VOLATILITY: f64 = 0.05;
const VOLATILITY_PENALTY: u8 = 15;
const MIN_CONFIDENCE: u8 = 20;

/// Inputs to the decision, all taken from the same window.
#[derive(Debug, Clone, Copy)]
pub struct DecisionInputs {
    pub sma5: f64,
    pub sma10: f64,
    pub sma20: f64,
    pub rsi: f64,
    pub volatility: f64,
}

/// Outcome of the decision rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub direction: SignalDirection,
    pub strength: u8,
    pub confidence: u8,
    pub reasoning: Vec<String>,
}

/// Apply the moving-average alignment rule, then volatility dampening.
pub fn decide(inputs: &DecisionInputs) -> Decision {
    let DecisionInputs {
        sma5,
        sma10,
        sma20,
        rsi,
        volatility,
    } = *inputs;

    let mut decision = if sma5 > sma10 && sma10 > sma20 && rsi < OVERBOUGHT {
        let bonus = if rsi < OVERSOLD { EXTREME_RSI_BONUS } else { 0 };
        let confidence = (NEUTRAL_SCORE + bonus).min(MAX_CONFIDENCE);
        Decision {
            direction: SignalDirection::Buy,
            strength: (confidence + STRENGTH_MARGIN).min(MAX_STRENGTH),
            confidence,
            reasoning: vec![
                "SMA5 > SMA10 > SMA20 (bullish trend)".to_string(),
                format!("RSI at {:.1} indicates room for growth", rsi),
            ],
        }
    } else if sma5 < sma10 && sma10 < sma20 && rsi > OVERSOLD {
        let bonus = if rsi > OVERBOUGHT { EXTREME_RSI_BONUS } else { 0 };
        let confidence = (NEUTRAL_SCORE + bonus).min(MAX_CONFIDENCE);
        Decision {
            direction: SignalDirection::Sell,
            strength: (confidence + STRENGTH_MARGIN).min(MAX_STRENGTH),
            confidence,
            reasoning: vec![
                "SMA5 < SMA10 < SMA20 (bearish trend)".to_string(),
                format!("RSI at {:.1} indicates potential reversal", rsi),
            ],
        }
    } else {
        Decision {
            direction: SignalDirection::Hold,
            strength: NEUTRAL_SCORE,
            confidence: NEUTRAL_SCORE,
            reasoning: vec![
                "Market conditions are neutral".to_string(),
                "Waiting for clearer trend signals".to_string(),
            ],
        }
    };

    if volatility > HIGH_VOLATILITY {
        decision.confidence = decision
            .confidence
            .saturating_sub(VOLATILITY_PENALTY)
            .max(MIN_CONFIDENCE);
        decision
            .reasoning
            .push("High volatility detected - reducing confidence".to_string());
    }

    decision
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(sma5: f64, sma10: f64, sma20: f64, rsi: f64, volatility: f64) -> DecisionInputs {
        DecisionInputs {
            sma5,
            sma10,
            sma20,
            rsi,
            volatility,
        }
    }

    #[test]
    fn test_bullish_alignment_buys() {
        let d = decide(&inputs(12.0, 11.0, 10.0, 55.0, 0.01));
        assert_eq!(d.direction, SignalDirection::Buy);
        assert_eq!(d.confidence, 50);
        assert_eq!(d.strength, 60);
        assert_eq!(d.reasoning[0], "SMA5 > SMA10 > SMA20 (bullish trend)");
        assert_eq!(d.reasoning[1], "RSI at 55.0 indicates room for growth");
        assert_eq!(d.reasoning.len(), 2);
    }

    #[test]
    fn test_oversold_bullish_gets_bonus() {
        let d = decide(&inputs(12.0, 11.0, 10.0, 25.0, 0.01));
        assert_eq!(d.direction, SignalDirection::Buy);
        assert_eq!(d.confidence, 70);
        assert_eq!(d.strength, 80);
    }

    #[test]
    fn test_overbought_blocks_buy() {
        let d = decide(&inputs(12.0, 11.0, 10.0, 70.0, 0.01));
        assert_eq!(d.direction, SignalDirection::Hold);
        assert_eq!(d.confidence, 50);
        assert_eq!(d.strength, 50);
    }

    #[test]
    fn test_bearish_alignment_sells() {
        let d = decide(&inputs(8.0, 9.0, 10.0, 42.04, 0.01));
        assert_eq!(d.direction, SignalDirection::Sell);
        assert_eq!(d.confidence, 50);
        assert_eq!(d.strength, 60);
        assert_eq!(d.reasoning[0], "SMA5 < SMA10 < SMA20 (bearish trend)");
        assert_eq!(d.reasoning[1], "RSI at 42.0 indicates potential reversal");
    }

    #[test]
    fn test_overbought_bearish_gets_bonus() {
        let d = decide(&inputs(8.0, 9.0, 10.0, 80.0, 0.01));
        assert_eq!(d.direction, SignalDirection::Sell);
        assert_eq!(d.confidence, 70);
        assert_eq!(d.strength, 80);
    }

    #[test]
    fn test_oversold_blocks_sell() {
        let d = decide(&inputs(8.0, 9.0, 10.0, 30.0, 0.01));
        assert_eq!(d.direction, SignalDirection::Hold);
    }

    #[test]
    fn test_mixed_alignment_holds() {
        let d = decide(&inputs(12.0, 10.0, 11.0, 50.0, 0.0));
        assert_eq!(d.direction, SignalDirection::Hold);
        assert_eq!(
            d.reasoning,
            vec![
                "Market conditions are neutral".to_string(),
                "Waiting for clearer trend signals".to_string(),
            ]
        );
    }

    #[test]
    fn test_equal_averages_hold() {
        let d = decide(&inputs(10.0, 10.0, 10.0, 50.0, 0.0));
        assert_eq!(d.direction, SignalDirection::Hold);
    }

    #[test]
    fn test_high_volatility_dampens_every_branch() {
        let cases = [
            (inputs(12.0, 11.0, 10.0, 55.0, 0.2), 50, 35, 60),
            (inputs(12.0, 11.0, 10.0, 25.0, 0.2), 70, 55, 80),
            (inputs(8.0, 9.0, 10.0, 80.0, 0.2), 70, 55, 80),
            (inputs(10.0, 10.0, 10.0, 50.0, 0.2), 50, 35, 50),
        ];

        for (input, undamped, damped, strength) in cases {
            let calm = decide(&DecisionInputs {
                volatility: 0.0,
                ..input
            });
            let wild = decide(&input);
            assert_eq!(calm.confidence, undamped);
            assert_eq!(wild.confidence, damped);
            assert_eq!(wild.strength, strength);
            assert_eq!(
                wild.reasoning.last().map(String::as_str),
                Some("High volatility detected - reducing confidence")
            );
            assert_eq!(wild.reasoning.len(), calm.reasoning.len() + 1);
        }
    }

    #[test]
    fn test_volatility_threshold_is_exclusive() {
        let d = decide(&inputs(10.0, 10.0, 10.0, 50.0, HIGH_VOLATILITY));
        assert_eq!(d.confidence, 50);
        assert_eq!(d.reasoning.len(), 2);
    }
}
