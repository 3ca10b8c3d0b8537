//! Hand records shared by parser, splitter and feature tests.

/// Trimmed, non-blank lines of a fixture.
pub fn lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

pub const HAND_192510344085: &str = "
PokerStars Hand #192510344085:  Hold'em No Limit ($50/$100 USD) - 2018/10/16 10:12:44 ET
Table 'Aludra' 6-max Seat #2 is the button
Seat 1: 0Human0 ($11219.75 in chips)
Seat 2: EthanBinder ($14558.07 in chips)
Seat 3: BigBlindBets ($10245 in chips)
Seat 4: ja.sam.gale ($10100 in chips)
Seat 5: mamamamama70 ($10337.50 in chips)
Seat 6: Bit2Easy ($10000 in chips)
BigBlindBets: posts small blind $50
ja.sam.gale: posts big blind $100
*** HOLE CARDS ***
mamamamama70: folds
Bit2Easy: folds
0Human0: folds
EthanBinder: folds
BigBlindBets: raises $200 to $300
ja.sam.gale: calls $200
*** FLOP *** [6h 4c Kc]
BigBlindBets: checks
ja.sam.gale: checks
*** TURN *** [6h 4c Kc] [As]
BigBlindBets: checks
ja.sam.gale: checks
*** RIVER *** [6h 4c Kc As] [Jc]
BigBlindBets: checks
ja.sam.gale: checks
*** SHOW DOWN ***
BigBlindBets: shows [3s 3c] (a pair of Threes)
ja.sam.gale: mucks hand
BigBlindBets collected $595 from pot
*** SUMMARY ***
Total pot $600 | Rake $5
Board [6h 4c Kc As Jc]
Seat 1: 0Human0 folded before Flop (didn't bet)
Seat 2: EthanBinder (button) folded before Flop (didn't bet)
Seat 3: BigBlindBets (small blind) showed [3s 3c] and won ($595) with a pair of Threes
Seat 4: ja.sam.gale (big blind) mucked [8d 7h]
Seat 5: mamamamama70 folded before Flop (didn't bet)
Seat 6: Bit2Easy folded before Flop (didn't bet)
";

pub const HAND_204214924894: &str = "
PokerStars Zoom Hand #204214924894:  Hold'em No Limit ($0.05/$0.10) - 2019/10/01 12:03:11 ET
Table 'Donati' 6-max Seat #4 is the button
Seat 1: Real Suka ($8.79 in chips)
Seat 2: LFGK ($10.05 in chips)
Seat 3: lastfox ($10 in chips)
Seat 4: Aikocho ($4.25 in chips)
Seat 5: Bluebell89 ($10.09 in chips)
Seat 6: Burda19 ($10 in chips)
Bluebell89: posts small blind $0.05
Burda19: posts big blind $0.10
*** HOLE CARDS ***
Real Suka: calls $0.10
LFGK: raises $0.30 to $0.40
lastfox: folds
Aikocho: calls $0.40
Bluebell89: folds
Burda19: folds
Real Suka: raises $8.39 to $8.79 and is all-in
LFGK: folds
Aikocho: calls $3.85 and is all-in
Uncalled bet ($4.54) returned to Real Suka
*** FLOP *** [6s Jd 6c]
*** TURN *** [6s Jd 6c] [3s]
*** RIVER *** [6s Jd 6c 3s] [Js]
*** SHOW DOWN ***
Real Suka: shows [5c Kc] (two pair, Jacks and Sixes)
Aikocho: shows [Tc Ac] (two pair, Jacks and Sixes - Ace kicker)
Aikocho collected $8.64 from pot
*** SUMMARY ***
Total pot $9.05 | Rake $0.41
Board [6s Jd 6c 3s Js]
Seat 1: Real Suka showed [5c Kc] and lost with two pair, Jacks and Sixes
Seat 2: LFGK folded before Flop
Seat 3: lastfox folded before Flop (didn't bet)
Seat 4: Aikocho (button) showed [Tc Ac] and won ($8.64) with two pair, Jacks and Sixes
Seat 5: Bluebell89 (small blind) folded before Flop
Seat 6: Burda19 (big blind) folded before Flop
";

pub const HAND_199880482022: &str = "
PokerStars Hand #199880482022:  Hold'em No Limit ($1/$2 USD) - 2019/05/01 21:40:05 ET
Table 'Hypatia' 6-max Seat #6 is the button
Seat 1: cryingkevin ($200 in chips)
Seat 2: cpatras1 ($213.50 in chips)
Seat 3: AIvers2 ($200 in chips)
Seat 4: sauloCosta10 ($187.22 in chips)
Seat 5: ValeraBart ($204.11 in chips)
Seat 6: Tigriana ($201 in chips)
cryingkevin: posts small blind $1
cpatras1: posts big blind $2
*** HOLE CARDS ***
Dealt to ValeraBart [6d 4h]
AIvers2: folds
sauloCosta10: raises $2.30 to $4.30
ValeraBart: folds
Tigriana: folds
cryingkevin: calls $3.30
cpatras1: folds
*** FLOP *** [7d 2c 4c]
cryingkevin: checks
sauloCosta10: bets $3.02
cryingkevin: calls $3.02
*** TURN *** [7d 2c 4c] [4s]
cryingkevin: checks
sauloCosta10: checks
*** RIVER *** [7d 2c 4c 4s] [Th]
cryingkevin: bets $15.81
sauloCosta10: calls $15.81
*** SHOW DOWN ***
cryingkevin: shows [6c 9d] (a pair of Fours)
sauloCosta10: shows [8h 7h] (two pair, Sevens and Fours)
sauloCosta10 collected $45.85 from pot
*** SUMMARY ***
Total pot $48.26 | Rake $2.41
Board [7d 2c 4c 4s Th]
Seat 1: cryingkevin (small blind) showed [6c 9d] and lost with a pair of Fours
Seat 2: cpatras1 (big blind) folded before Flop
Seat 3: AIvers2 folded before Flop (didn't bet)
Seat 4: sauloCosta10 showed [8h 7h] and won ($45.85) with two pair, Sevens and Fours
Seat 5: ValeraBart folded before Flop (didn't bet)
Seat 6: Tigriana (button) folded before Flop (didn't bet)
";

pub const HAND_207718751903: &str = "
PokerStars Hand #207718751903:  Hold'em No Limit ($0.50/$1.00 USD) - 2020/01/11 08:30:00 ET
Table 'Ariadne' 6-max Seat #6 is the button
Seat 1: pike ($100 in chips)
Seat 2: roach ($98.50 in chips)
Seat 3: perch ($120 in chips)
Seat 6: carp ($100 in chips)
pike: posts small blind $0.50
roach: posts big blind $1
*** HOLE CARDS ***
perch: raises $2 to $3
carp: folds
pike: folds
roach: calls $2
*** FLOP *** [8c 8d 2h]
roach: checks
perch: bets $4
roach: folds
Uncalled bet ($4) returned to perch
perch collected $6.20 from pot
perch: doesn't show hand
*** SUMMARY ***
Total pot $6.50 | Rake $0.30
Board [8c 8d 2h]
Seat 1: pike (small blind) folded before Flop
Seat 2: roach (big blind) folded on the Flop
Seat 3: perch collected ($6.20)
Seat 6: carp (button) folded before Flop (didn't bet)
";

pub const HAND_RUNOUT: &str = "
PokerStars Hand #210000000001:  Hold'em No Limit ($0.25/$0.50 USD) - 2020/03/03 03:03:03 ET
Table 'Twice' 6-max Seat #1 is the button
Seat 1: alice ($50 in chips)
Seat 2: bob ($50 in chips)
Seat 3: carol ($50 in chips)
bob: posts small blind $0.25
carol: posts big blind $0.50
*** HOLE CARDS ***
alice: raises $49.50 to $50 and is all-in
bob: folds
carol: calls $49.50 and is all-in
*** FIRST FLOP *** [2c 3d 4h]
*** FIRST TURN *** [2c 3d 4h] [5s]
*** FIRST RIVER *** [2c 3d 4h 5s] [6c]
*** SECOND FLOP *** [Ah Kd Qs]
*** SECOND TURN *** [Ah Kd Qs] [Jc]
*** SECOND RIVER *** [Ah Kd Qs Jc] [Th]
*** FIRST SHOW DOWN ***
alice: shows [As Ad] (a straight, Deuce to Six)
carol: shows [Ks Kc] (a pair of Kings)
alice collected $49.62 from pot
*** SECOND SHOW DOWN ***
carol collected $49.63 from pot
*** SUMMARY ***
Total pot $100.25 | Rake $1
Hand was run twice
FIRST Board [2c 3d 4h 5s 6c]
SECOND Board [Ah Kd Qs Jc Th]
Seat 1: alice (button) showed [As Ad] and won ($49.62)
Seat 2: bob (small blind) folded before Flop
Seat 3: carol (big blind) showed [Ks Kc] and won ($49.63)
";

pub const HAND_NOISY: &str = "
PokerStars Hand #220000000002:  Hold'em No Limit ($0.25/$0.50 USD) - 2020/02/02 20:20:20 ET
Table 'Noisy' 6-max Seat #3 is the button
Seat 1: alice ($50 in chips)
Seat 2: bob ($50 in chips)
Seat 3: carol ($50 in chips)
dave joins the table at seat #4
alice: posts small blind $0.25
bob: posts big blind $0.50
*** HOLE CARDS ***
carol: folds
carol said, \"gl: folds\"
alice is disconnected
alice is connected
alice: calls $0.25
this line means nothing
bob: checks
*** FLOP *** [Td 9d 2s]
bob: bets $1
alice has timed out
alice: folds
Uncalled bet ($1) returned to bob
bob collected $0.95 from pot
bob: doesn't show hand
dave will be allowed to play after the button
*** SUMMARY ***
Total pot $1 | Rake $0.05
Board [Td 9d 2s]
Seat 1: alice (small blind) folded on the Flop
Seat 2: bob (big blind) collected ($0.95)
Seat 3: carol (button) folded before Flop (didn't bet)
";

pub const HAND_OMAHA: &str = "
PokerStars Hand #230000000003:  Omaha Pot Limit ($0.10/$0.25 USD) - 2020/04/04 04:04:04 ET
Table 'Omicron' 6-max Seat #1 is the button
Seat 1: hero ($25 in chips)
Seat 2: villain ($25 in chips)
hero: posts small blind $0.10
villain: posts big blind $0.25
*** HOLE CARDS ***
Dealt to hero [Ah Kh Qd Jd]
hero: folds
Uncalled bet ($0.15) returned to villain
villain collected $0.20 from pot
*** SUMMARY ***
Total pot $0.20 | Rake $0
Seat 1: hero (button) (small blind) folded before Flop
Seat 2: villain (big blind) collected ($0.20)
";

pub const HAND_PACIFIC: &str = "
#Game No : 555000111
***** 888poker Hand History for Game 555000111 *****
$0.05/$0.10 Blinds No Limit Holdem - *** 01 03 2021 20:15:00
Table Oslo 6 Max (Real Money)
Seat 2 is the button
Total number of players : 4
Seat 1: alpha ( $10.00 )
Seat 2: bravo ( $12.50 )
Seat 4: charlie ( $8.00 )
Seat 6: delta ( $10.00 )
charlie posts small blind [$0.05]
delta posts big blind [$0.10]
** Dealing down cards **
alpha shows [ Jh, Jd ]
alpha raises [$0.30]
bravo folds
charlie folds
delta calls [$0.20]
** Dealing flop ** [ Qs, 7h, 2d ]
delta checks
alpha bets [$0.40]
delta calls [$0.40]
** Dealing turn ** [ 9c ]
delta checks
alpha checks
** Dealing river ** [ Ad ]
delta bets [$1.00]
alpha folds
** Summary **
delta collected [ $1.72 ]
delta did not show his hand
";

pub const BAD_HEADER: &str = "
PokerStars Hand #240000000001: Tournament garbage
Table 'Broken' 6-max Seat #1 is the button
Seat 1: alice ($50 in chips)
";

pub const NO_SEATS: &str = "
PokerStars Hand #240000000002:  Hold'em No Limit ($0.25/$0.50 USD) - 2020/05/05 05:05:05 ET
Table 'Empty' 6-max Seat #1 is the button
*** HOLE CARDS ***
";

pub const NO_BIG_BLIND: &str = "
PokerStars Hand #240000000003:  Hold'em No Limit ($0.25/$0.50 USD) - 2020/05/05 05:05:05 ET
Table 'Broken' 6-max Seat #1 is the button
Seat 1: alice ($50 in chips)
Seat 2: bob ($50 in chips)
alice: posts small blind $0.25
*** HOLE CARDS ***
bob: folds
";

pub const NO_HOLE: &str = "
PokerStars Hand #240000000004:  Hold'em No Limit ($0.25/$0.50 USD) - 2020/05/05 05:05:05 ET
Table 'Broken' 6-max Seat #1 is the button
Seat 1: alice ($50 in chips)
Seat 2: bob ($50 in chips)
alice: posts small blind $0.25
bob: posts big blind $0.50
alice: folds
";

pub const NO_SUMMARY: &str = "
PokerStars Hand #240000000005:  Hold'em No Limit ($0.25/$0.50 USD) - 2020/05/05 05:05:05 ET
Table 'Broken' 6-max Seat #1 is the button
Seat 1: alice ($50 in chips)
Seat 2: bob ($50 in chips)
alice: posts small blind $0.25
bob: posts big blind $0.50
*** HOLE CARDS ***
alice: folds
";

pub const NO_TOTAL: &str = "
PokerStars Hand #240000000006:  Hold'em No Limit ($0.25/$0.50 USD) - 2020/05/05 05:05:05 ET
Table 'Broken' 6-max Seat #1 is the button
Seat 1: alice ($50 in chips)
Seat 2: bob ($50 in chips)
alice: posts small blind $0.25
bob: posts big blind $0.50
*** HOLE CARDS ***
alice: folds
*** SUMMARY ***
Seat 1: alice (button) (small blind) folded before Flop
";

pub const BAD_CARDS: &str = "
PokerStars Hand #240000000007:  Hold'em No Limit ($0.25/$0.50 USD) - 2020/05/05 05:05:05 ET
Table 'Broken' 6-max Seat #1 is the button
Seat 1: alice ($50 in chips)
Seat 2: bob ($50 in chips)
alice: posts small blind $0.25
bob: posts big blind $0.50
*** HOLE CARDS ***
alice: calls $0.25
bob: checks
*** FLOP *** [6h 4x Kc]
*** SUMMARY ***
Total pot $1 | Rake $0
";

pub const SHORT_FLOP: &str = "
PokerStars Hand #240000000008:  Hold'em No Limit ($0.25/$0.50 USD) - 2020/05/05 05:05:05 ET
Table 'Broken' 6-max Seat #1 is the button
Seat 1: alice ($50 in chips)
Seat 2: bob ($50 in chips)
alice: posts small blind $0.25
bob: posts big blind $0.50
*** HOLE CARDS ***
alice: calls $0.25
bob: checks
*** FLOP *** [6h 4c]
*** SUMMARY ***
Total pot $1 | Rake $0
";

pub const STRANGER_SHOWS: &str = "
PokerStars Hand #240000000009:  Hold'em No Limit ($0.25/$0.50 USD) - 2020/05/05 05:05:05 ET
Table 'Broken' 6-max Seat #1 is the button
Seat 1: alice ($50 in chips)
Seat 2: bob ($50 in chips)
alice: posts small blind $0.25
bob: posts big blind $0.50
*** HOLE CARDS ***
alice: calls $0.25
bob: checks
*** SUMMARY ***
Total pot $1 | Rake $0
Seat 4: nobody showed [Ah Ad] and won ($1)
";

/// Lines without a recognizable header, as left by a truncated export.
pub const FRAGMENT_STRANGER: &str = "
PokerStarz Hnd 999: garbled
Seat 1: stranger ($50 in chips)
*** SUMMARY ***
Seat 1: stranger showed [Ah Kh]
";

pub const FRAGMENT_SHOWDOWN: &str = "
garbled fragment
Seat 1: 0Human0 showed [Ah Kh] and won
";
