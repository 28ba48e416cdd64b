use crate::models::Question;

use super::QuestionBank;

pub(super) fn bank() -> QuestionBank {
    QuestionBank::new(easy(), medium(), hard())
}

fn easy() -> Vec<Question> {
    vec![
        Question::new(
            "What does CPU stand for?",
            ["Central Processing Unit", "Computer Personal Unit", "Central Program Utility", "Core Processing Utility"],
            "Central Processing Unit",
        ),
        Question::new(
            "Which company created the Windows operating system?",
            ["Apple", "Microsoft", "IBM", "Google"],
            "Microsoft",
        ),
        Question::new(
            "What does RAM stand for?",
            ["Random Access Memory", "Read Access Memory", "Rapid Action Memory", "Run Active Module"],
            "Random Access Memory",
        ),
        Question::new(
            "Which of these is a web browser?",
            ["Excel", "Firefox", "Photoshop", "Linux"],
            "Firefox",
        ),
        Question::new(
            "What does WWW stand for?",
            ["World Wide Web", "Wide World Web", "Web World Wide", "World Web Wide"],
            "World Wide Web",
        ),
        Question::new(
            "Which device is used to type text into a computer?",
            ["Monitor", "Keyboard", "Speaker", "Printer"],
            "Keyboard",
        ),
        Question::new(
            "How many bits are in a byte?",
            ["4", "8", "16", "32"],
            "8",
        ),
        Question::new(
            "Which company makes the iPhone?",
            ["Samsung", "Nokia", "Apple", "Sony"],
            "Apple",
        ),
        Question::new(
            "What does USB stand for?",
            ["Universal Serial Bus", "United System Board", "Universal Storage Bank", "Unified Serial Backbone"],
            "Universal Serial Bus",
        ),
        Question::new(
            "Which of these is an operating system?",
            ["Linux", "Chrome", "Word", "Python"],
            "Linux",
        ),
        Question::new(
            "What is the main circuit board of a computer called?",
            ["Motherboard", "Keyboard", "Dashboard", "Clipboard"],
            "Motherboard",
        ),
        Question::new(
            "Which key combination usually copies selected text on Windows?",
            ["Ctrl + V", "Ctrl + C", "Ctrl + X", "Ctrl + Z"],
            "Ctrl + C",
        ),
        Question::new(
            "What does Wi-Fi let a device do?",
            ["Print faster", "Connect to a network without cables", "Charge its battery", "Cool the processor"],
            "Connect to a network without cables",
        ),
        Question::new(
            "Which unit is larger?",
            ["Kilobyte", "Megabyte", "Gigabyte", "Byte"],
            "Gigabyte",
        ),
        Question::new(
            "What does a computer mouse mainly control?",
            ["The volume", "The on-screen pointer", "The power supply", "The fan speed"],
            "The on-screen pointer",
        ),
        Question::new(
            "Which company developed the Android operating system?",
            ["Apple", "Microsoft", "Google", "Amazon"],
            "Google",
        ),
        Question::new(
            "What is the file extension of a typical Word document?",
            [".docx", ".xlsx", ".pptx", ".jpg"],
            ".docx",
        ),
        Question::new(
            "Which of these stores data permanently even when powered off?",
            ["RAM", "CPU cache", "SSD", "Registers"],
            "SSD",
        ),
        Question::new(
            "What does PDF stand for?",
            ["Portable Document Format", "Printed Data File", "Personal Document Folder", "Public Data Format"],
            "Portable Document Format",
        ),
        Question::new(
            "Which symbol appears in every email address?",
            ["#", "@", "&", "%"],
            "@",
        ),
        Question::new(
            "What is the brain of the computer commonly called?",
            ["GPU", "CPU", "PSU", "HDD"],
            "CPU",
        ),
        Question::new(
            "Which of these is a search engine?",
            ["Bing", "Excel", "Zoom", "Slack"],
            "Bing",
        ),
    ]
}

fn medium() -> Vec<Question> {
    vec![
        Question::new(
            "What does HTML stand for?",
            ["HyperText Markup Language", "High Transfer Machine Language", "Hyperlink Text Management Language", "Home Tool Markup Language"],
            "HyperText Markup Language",
        ),
        Question::new(
            "Which port does HTTPS use by default?",
            ["21", "80", "443", "8080"],
            "443",
        ),
        Question::new(
            "Which language is primarily used to style web pages?",
            ["HTML", "CSS", "SQL", "C"],
            "CSS",
        ),
        Question::new(
            "What does DNS translate?",
            ["IP addresses to MAC addresses", "Domain names to IP addresses", "Files to folders", "Text to binary"],
            "Domain names to IP addresses",
        ),
        Question::new(
            "Who is credited with creating Linux?",
            ["Bill Gates", "Linus Torvalds", "Steve Jobs", "Dennis Ritchie"],
            "Linus Torvalds",
        ),
        Question::new(
            "Which data structure works on a last-in, first-out basis?",
            ["Queue", "Stack", "Tree", "Graph"],
            "Stack",
        ),
        Question::new(
            "What does SQL stand for?",
            ["Structured Query Language", "Simple Question Language", "Sequential Query Logic", "Standard Quality Language"],
            "Structured Query Language",
        ),
        Question::new(
            "Which version control system was created for Linux kernel development?",
            ["Subversion", "Mercurial", "Git", "CVS"],
            "Git",
        ),
        Question::new(
            "What is 1010 in binary as a decimal number?",
            ["8", "10", "12", "5"],
            "10",
        ),
        Question::new(
            "What does GPU stand for?",
            ["Graphics Processing Unit", "General Purpose Unit", "Graphical Program Utility", "Global Processing Unit"],
            "Graphics Processing Unit",
        ),
        Question::new(
            "Which protocol is used to send email?",
            ["FTP", "SMTP", "SSH", "DHCP"],
            "SMTP",
        ),
        Question::new(
            "What does IP stand for in networking?",
            ["Internet Protocol", "Internal Process", "Interface Port", "Information Packet"],
            "Internet Protocol",
        ),
        Question::new(
            "Which company created the Java programming language?",
            ["Microsoft", "Sun Microsystems", "Oracle", "IBM"],
            "Sun Microsystems",
        ),
        Question::new(
            "What is the hexadecimal value of decimal 255?",
            ["FF", "EE", "100", "F0"],
            "FF",
        ),
        Question::new(
            "Which command lists files in a Unix shell?",
            ["cd", "ls", "rm", "cat"],
            "ls",
        ),
        Question::new(
            "What does an IPv4 address consist of?",
            ["32 bits", "64 bits", "128 bits", "16 bits"],
            "32 bits",
        ),
        Question::new(
            "Which of these is a NoSQL database?",
            ["PostgreSQL", "MySQL", "MongoDB", "SQLite"],
            "MongoDB",
        ),
        Question::new(
            "What does VPN stand for?",
            ["Virtual Private Network", "Very Private Node", "Verified Public Network", "Virtual Protocol Number"],
            "Virtual Private Network",
        ),
        Question::new(
            "Which HTTP status code means 'Not Found'?",
            ["200", "301", "404", "500"],
            "404",
        ),
        Question::new(
            "Which language runs natively in web browsers?",
            ["JavaScript", "Go", "Rust", "Kotlin"],
            "JavaScript",
        ),
        Question::new(
            "What does API stand for?",
            ["Application Programming Interface", "Advanced Program Integration", "Automated Protocol Interface", "Application Process Input"],
            "Application Programming Interface",
        ),
    ]
}

fn hard() -> Vec<Question> {
    vec![
        Question::new(
            "What is the time complexity of binary search on a sorted array?",
            ["O(n)", "O(log n)", "O(n log n)", "O(1)"],
            "O(log n)",
        ),
        Question::new(
            "Which layer of the OSI model handles routing?",
            ["Data Link", "Network", "Transport", "Session"],
            "Network",
        ),
        Question::new(
            "Which algorithm is used by RSA for its security assumption?",
            ["Discrete logarithm", "Integer factorization", "Elliptic curve pairing", "Lattice reduction"],
            "Integer factorization",
        ),
        Question::new(
            "In which year was the first version of the C programming language released?",
            ["1966", "1972", "1980", "1989"],
            "1972",
        ),
        Question::new(
            "What does ACID stand for in databases?",
            ["Atomicity, Consistency, Isolation, Durability", "Access, Control, Integrity, Data", "Availability, Concurrency, Isolation, Distribution", "Atomicity, Caching, Indexing, Durability"],
            "Atomicity, Consistency, Isolation, Durability",
        ),
        Question::new(
            "Which sorting algorithm has the best worst-case complexity?",
            ["Quicksort", "Bubble sort", "Merge sort", "Insertion sort"],
            "Merge sort",
        ),
        Question::new(
            "What is the size of an IPv6 address?",
            ["32 bits", "64 bits", "128 bits", "256 bits"],
            "128 bits",
        ),
        Question::new(
            "Which transport protocol does not guarantee delivery?",
            ["TCP", "UDP", "SCTP", "QUIC"],
            "UDP",
        ),
        Question::new(
            "What does the 'S' in SOLID stand for?",
            ["Single responsibility", "Strong typing", "Static dispatch", "Separation of state"],
            "Single responsibility",
        ),
        Question::new(
            "Which hash function output is 256 bits long?",
            ["MD5", "SHA-1", "SHA-256", "CRC32"],
            "SHA-256",
        ),
        Question::new(
            "What problem does Dijkstra's algorithm solve?",
            ["Minimum spanning tree", "Shortest paths from a source", "Maximum flow", "Topological ordering"],
            "Shortest paths from a source",
        ),
        Question::new(
            "Which consensus algorithm was designed to be easier to understand than Paxos?",
            ["Raft", "PBFT", "Gossip", "Two-phase commit"],
            "Raft",
        ),
        Question::new(
            "What is a race condition?",
            ["A benchmark between CPUs", "Behavior depending on the timing of concurrent operations", "A deadlock between two threads", "A compiler optimization"],
            "Behavior depending on the timing of concurrent operations",
        ),
        Question::new(
            "Which CAP theorem property is traded away by a system that stays available during partitions?",
            ["Consistency", "Availability", "Partition tolerance", "Durability"],
            "Consistency",
        ),
        Question::new(
            "What is the default page size on most x86-64 systems?",
            ["1 KB", "4 KB", "64 KB", "2 MB"],
            "4 KB",
        ),
        Question::new(
            "Which data structure gives O(1) average lookup by key?",
            ["Linked list", "Binary heap", "Hash table", "Sorted array"],
            "Hash table",
        ),
        Question::new(
            "Who proposed the concept of the Turing machine?",
            ["John von Neumann", "Alan Turing", "Claude Shannon", "Alonzo Church"],
            "Alan Turing",
        ),
        Question::new(
            "Which TCP mechanism prevents a sender from overwhelming a receiver?",
            ["Flow control", "Checksumming", "Multiplexing", "Fragmentation"],
            "Flow control",
        ),
        Question::new(
            "What does a TLS handshake primarily establish?",
            ["A shared session key", "A routing table", "A DNS record", "An IP lease"],
            "A shared session key",
        ),
        Question::new(
            "Which complexity class contains problems verifiable in polynomial time?",
            ["P", "NP", "EXPTIME", "PSPACE-complete"],
            "NP",
        ),
    ]
}
